//! CSV format handling for datasets
//!
//! This module centralizes all delimited-text format concerns, providing:
//! - Reader and writer configuration shared by every code path
//! - Row-shape validation against the header
//! - Dataset serialization
//!
//! All functions operate on in-memory readers and writers (no path handling)
//! so they can be tested without touching the filesystem.
//!
//! # Format
//!
//! - Comma-separated fields
//! - Every field wrapped in double quotes when written
//! - Embedded quotes doubled, embedded newlines allowed inside quotes
//! - CRLF record terminator when written; CR, LF or CRLF accepted when read

use crate::types::{Dataset, DatasetError, Row};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::io::Write;
use tracing::warn;

/// Reader configuration for dataset files
///
/// Headers are handled by the codec itself, so the tokenizer treats every
/// row as data. Field counts are allowed to vary so that malformed rows
/// reach the shape check instead of failing the whole read. Fields are never
/// trimmed; whitespace is data.
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(8 * 1024);
    builder
}

/// Writer configuration for dataset files
///
/// `flexible` lets a dataset with ragged rows be written faithfully; the
/// encoder does not validate row shape.
pub fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF);
    builder
}

/// Check a body row against the header's field count
///
/// Emits one warning per rejected row with the row's values and both
/// counts.
///
/// # Returns
///
/// * `true` if the row has exactly `header_len` fields
/// * `false` if the row must be skipped
pub fn conforms_to_header(row: &Row, header_len: usize) -> bool {
    if row.len() == header_len {
        return true;
    }

    warn!(
        values = %row,
        len = row.len(),
        header_len,
        "Skip values: {} Invalid values length: {}, header length: {}.",
        row,
        row.len(),
        header_len
    );
    false
}

/// Line terminator written by [`writer_builder`]
const TERMINATOR: &[u8] = b"\r\n";

/// Write a dataset as delimited text
///
/// Writes the header row first, then each body row in order. Every field is
/// quoted. Row shape is not validated.
///
/// A row with zero fields is written as a bare terminator, which reads back
/// as a blank line. The encoder alone would write it as `""`, a row holding
/// one empty field.
///
/// # Arguments
///
/// * `dataset` - The dataset to encode
/// * `output` - Destination writer
///
/// # Returns
///
/// * `Ok(())` if every row was written and the output flushed
/// * `Err(DatasetError)` if the encoder or the underlying writer failed
pub fn write_dataset<W: Write>(dataset: &Dataset, mut output: W) -> Result<(), DatasetError> {
    let rows: Vec<&Row> = dataset.rows().collect();

    for run in rows.chunk_by(|a, b| a.is_empty() == b.is_empty()) {
        if run[0].is_empty() {
            for _ in run {
                output.write_all(TERMINATOR)?;
            }
            continue;
        }

        let mut writer = writer_builder().from_writer(&mut output);
        for row in run {
            writer
                .write_record(row.values())
                .map_err(DatasetError::write_error)?;
        }
        writer.flush()?;
    }

    output.flush()?;

    Ok(())
}
