//! Row reader with iterator interface
//!
//! Provides an iterator over the rows of a delimited file. Every row,
//! including the first, is yielded as a plain [`Row`]; deciding which row is
//! the header is left to the caller.
//!
//! # Iterator Interface
//!
//! `RowReader` yields `Result<Row, DatasetError>` for each record:
//!
//! ```no_run
//! use csv_dataset::io::RowReader;
//! use std::path::Path;
//!
//! let reader = RowReader::open(Path::new("data.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(row) => println!("{}", row),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Blank lines
//!
//! The tokenizer discards blank lines. They are still rows of the file (a
//! row with zero fields), so the reader recovers them from the bytes between
//! consecutive records and yields one empty `Row` per blank line, in file
//! order. CRLF, LF and a lone CR each end one line.
//!
//! # Error Handling
//!
//! - Failing to open or read the source is returned from `open()` / `from_reader()`
//! - Decode failures (e.g. invalid UTF-8) are yielded as `Err` items

use crate::io::csv_format::reader_builder;
use crate::types::{DatasetError, Row};
use csv::StringRecord;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reader over the rows of a delimited source
///
/// The source is held in memory so blank lines skipped by the tokenizer can
/// be located by byte offset.
pub struct RowReader {
    reader: csv::Reader<Cursor<Vec<u8>>>,
    record: StringRecord,
    /// Blank lines found but not yet yielded
    pending_blanks: usize,
    /// Record that follows the pending blank lines
    pending_row: Option<Row>,
    finished: bool,
}

impl RowReader {
    /// Open a delimited file for reading
    ///
    /// # Returns
    ///
    /// * `Ok(RowReader)` if the file was read successfully
    /// * `Err(DatasetError::FileAccess)` if it could not be opened
    pub fn open(path: &Path) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path).map_err(|e| DatasetError::file_access(path, &e))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Read all of `source` and wrap it
    pub fn from_reader<R: Read>(mut source: R) -> Result<Self, DatasetError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            reader: reader_builder().from_reader(Cursor::new(bytes)),
            record: StringRecord::new(),
            pending_blanks: 0,
            pending_row: None,
            finished: false,
        }
    }

    fn bytes(&self) -> &[u8] {
        self.reader.get_ref().get_ref()
    }

    /// Queue `blanks` empty rows, then `row`, returning the first item
    fn queue(&mut self, blanks: usize, row: Option<Row>) -> Option<Row> {
        if blanks == 0 {
            return row;
        }
        self.pending_blanks = blanks - 1;
        self.pending_row = row;
        Some(Row::default())
    }
}

impl Iterator for RowReader {
    type Item = Result<Row, DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_blanks > 0 {
            self.pending_blanks -= 1;
            return Some(Ok(Row::default()));
        }
        if let Some(row) = self.pending_row.take() {
            return Some(Ok(row));
        }
        if self.finished {
            return None;
        }

        let start = self.reader.position().byte() as usize;
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let end = self.reader.position().byte() as usize;
                let blanks = count_blank_lines(self.bytes(), start, end);
                let row = Row::from(&self.record);
                self.queue(blanks, Some(row)).map(Ok)
            }
            Ok(false) => {
                self.finished = true;
                let blanks = count_blank_lines(self.bytes(), start, self.bytes().len());
                self.queue(blanks, None).map(Ok)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Count the blank lines at the start of `data[start..end]`
///
/// `start` is where the tokenizer stopped after the previous record. With a
/// CRLF terminator the tokenizer stops between `\r` and `\n`; that `\n`
/// belongs to the previous record and is not a blank line.
fn count_blank_lines(data: &[u8], start: usize, end: usize) -> usize {
    let end = end.min(data.len());
    let mut index = start;
    if start > 0 && data[start - 1] == b'\r' && data.get(start) == Some(&b'\n') {
        index += 1;
    }

    let mut blanks = 0;
    while index < end && matches!(data[index], b'\r' | b'\n') {
        if data[index] == b'\r' && index + 1 < end && data[index + 1] == b'\n' {
            index += 2;
        } else {
            index += 1;
        }
        blanks += 1;
    }

    blanks
}

/// Count the rows of a delimited file by decoding it completely
///
/// Content is discarded; only the number of rows is kept. Blank lines count
/// as rows. Any decode error aborts the count.
pub fn count_rows(path: &Path) -> Result<usize, DatasetError> {
    let mut count = 0;
    for row in RowReader::open(path)? {
        row?;
        count += 1;
    }

    Ok(count)
}
