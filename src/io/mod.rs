//! I/O module
//!
//! Handles delimited-text decoding and encoding.
//!
//! # Components
//!
//! - `csv_format` - Format configuration, row-shape validation, dataset serialization
//! - `row_reader` - Streaming reader yielding one `Row` per record
//! - `codec` - Path-level `load` and `save`

pub mod codec;
pub mod csv_format;
pub mod row_reader;

pub use codec::{load, read_dataset, save};
pub use csv_format::{conforms_to_header, write_dataset};
pub use row_reader::{count_rows, RowReader};
