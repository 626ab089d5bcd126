//! Structured-record adapter
//!
//! Converts sequences of typed records into the [`Dataset`](crate::Dataset)
//! shape. Field names become the header and each record's field values,
//! rendered as strings, become a body row.
//!
//! - `traits` - The `Record` and `AsDataset` traits and the `record_fields!` macro
//! - `convert` - Conversion functions and the closure-based `FieldMap`

pub mod convert;
pub mod traits;

pub use convert::{convert, convert_serialized, FieldMap};
pub use traits::{AsDataset, Record};
