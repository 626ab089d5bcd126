//! Path-level dataset codec
//!
//! `load` and `save` are the file-facing entry points. Each call opens its
//! own file handle, which is closed when the call returns on every path.
//!
//! # Load outcomes
//!
//! ```text
//! path missing / not a regular file  →  Ok(None)
//! file with zero rows                →  Ok(None)
//! (a blank line is a row with zero fields)
//! file with one row                  →  Ok(Some(header only))
//! file with more rows                →  Ok(Some(header + conforming body rows))
//! open / decode failure              →  Err(DatasetError)
//! ```

use crate::io::csv_format::{conforms_to_header, write_dataset};
use crate::io::row_reader::RowReader;
use crate::strategy::{LoadStrategy, TwoPassLoader};
use crate::types::{Dataset, DatasetError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a dataset from a delimited file
///
/// Uses the two-pass loader: the file is decoded once to count rows, then
/// decoded again to build the dataset. Body rows whose field count differs
/// from the header are skipped with a warning.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// match csv_dataset::load(Path::new("data.csv")) {
///     Ok(Some(dataset)) => println!("{} rows", dataset.len()),
///     Ok(None) => println!("no data"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn load(path: &Path) -> Result<Option<Dataset>, DatasetError> {
    TwoPassLoader.load(path)
}

/// Save a dataset to a delimited file
///
/// Creates or truncates `path`, then writes the header and body rows with
/// every field quoted.
pub fn save(path: &Path, dataset: &Dataset) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|e| DatasetError::file_access(path, &e))?;
    write_dataset(dataset, file)
}

/// Decode a dataset from any reader in a single pass
///
/// Returns `Ok(None)` when the source holds no rows.
pub fn read_dataset<R: Read>(source: R) -> Result<Option<Dataset>, DatasetError> {
    let mut rows = RowReader::from_reader(source)?;

    let header = match rows.next() {
        Some(row) => row?,
        None => return Ok(None),
    };

    let header_len = header.len();
    let mut dataset = Dataset::header_only(header);
    for row in rows {
        let row = row?;
        if conforms_to_header(&row, header_len) {
            dataset.push(row);
        }
    }

    Ok(Some(dataset))
}
