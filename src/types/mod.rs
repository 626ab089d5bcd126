//! Types module
//!
//! Contains the in-memory shapes shared by the codec and the adapter:
//! - `row`: a single record of string fields
//! - `dataset`: a header row plus body rows
//! - `error`: error types for loading, saving and converting

pub mod dataset;
pub mod error;
pub mod row;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use row::Row;
