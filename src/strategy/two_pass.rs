//! Two-pass load strategy
//!
//! The file is decoded twice:
//! 1. `count_rows` decodes every row, blank lines included, and keeps only
//!    the count
//! 2. `RowReader` re-opens the file; the first row becomes the header and the
//!    remaining rows are checked against it
//!
//! The count decides the short-circuits: zero rows yields no dataset, one
//! row yields a header-only dataset without reading any further.

use crate::io::csv_format::conforms_to_header;
use crate::io::row_reader::{count_rows, RowReader};
use crate::strategy::LoadStrategy;
use crate::types::{Dataset, DatasetError};
use std::path::Path;

/// Two-pass load strategy
///
/// # Examples
///
/// ```no_run
/// use csv_dataset::strategy::{LoadStrategy, TwoPassLoader};
/// use std::path::Path;
///
/// let dataset = TwoPassLoader
///     .load(Path::new("data.csv"))
///     .expect("Load failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TwoPassLoader;

impl LoadStrategy for TwoPassLoader {
    fn load(&self, path: &Path) -> Result<Option<Dataset>, DatasetError> {
        if !path.is_file() {
            return Ok(None);
        }

        let row_count = count_rows(path)?;
        if row_count == 0 {
            return Ok(None);
        }

        let mut rows = RowReader::open(path)?;

        // The file may have been emptied between the two passes
        let header = match rows.next() {
            Some(row) => row?,
            None => return Ok(None),
        };

        let mut dataset = Dataset::header_only(header);
        if row_count == 1 {
            return Ok(Some(dataset));
        }

        let header_len = dataset.field_count();
        for row in rows {
            let row = row?;
            if conforms_to_header(&row, header_len) {
                dataset.push(row);
            }
        }

        Ok(Some(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_two_pass_empty_file_is_none() {
        let file = create_temp_csv("");
        assert_eq!(TwoPassLoader.load(file.path()).unwrap(), None);
    }

    #[test]
    fn test_two_pass_blank_lines_only_has_empty_header() {
        let file = create_temp_csv("\n\r\n\n");

        let dataset = TwoPassLoader.load(file.path()).unwrap().unwrap();
        assert_eq!(dataset.header, row![]);
        assert_eq!(dataset.body, vec![row![], row![]]);
    }

    #[test]
    fn test_two_pass_counts_and_skips_blank_body_lines() {
        let file = create_temp_csv("\"h1\",\"h2\"\n\n\"1\",\"2\"\n\n");

        let dataset = TwoPassLoader.load(file.path()).unwrap().unwrap();
        assert_eq!(dataset.body, vec![row!["1", "2"]]);
    }

    #[test]
    fn test_two_pass_header_only() {
        let file = create_temp_csv("\"h1\",\"h2\"\r\n");

        let dataset = TwoPassLoader.load(file.path()).unwrap().unwrap();
        assert_eq!(dataset.header, row!["h1", "h2"]);
        assert!(dataset.body.is_empty());
    }

    #[test]
    fn test_two_pass_skips_malformed_row_and_keeps_order() {
        let file = create_temp_csv(
            "\"h1\",\"h2\",\"h3\"\n\
             \"a1\",\"a2\",\"a3\"\n\
             \"bad1\",\"bad2\"\n\
             \"c1\",\"c2\",\"c3\"\n",
        );

        let dataset = TwoPassLoader.load(file.path()).unwrap().unwrap();
        assert_eq!(
            dataset.body,
            vec![row!["a1", "a2", "a3"], row!["c1", "c2", "c3"]]
        );
    }

    #[test]
    fn test_two_pass_decode_error_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\"h\"\n\"\xff\"\n").unwrap();
        file.flush().unwrap();

        let result = TwoPassLoader.load(file.path());
        assert!(matches!(result, Err(DatasetError::ParseError { .. })));
    }

    #[test]
    fn test_two_pass_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TwoPassLoader>();
    }
}
