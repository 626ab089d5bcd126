//! CSV Dataset Library
//! # Overview
//!
//! This library reads and writes tabular data as fully quoted delimited text,
//! mapping between a generic row-based representation and typed records.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types ([`Row`], [`Dataset`], [`DatasetError`])
//! - [`io`] - Delimited-text codec: [`load`], [`save`] and in-memory helpers
//! - [`strategy`] - Pluggable load strategies (two-pass and single-pass)
//! - [`adapter`] - Conversion from typed records into datasets
//! - [`cli`] - CLI arguments parsing and command execution
//!
//! # Loading
//!
//! `load` returns `Ok(None)` when the path is not a regular file or the file
//! holds no rows. The first row becomes the header; body rows whose field
//! count differs from the header are skipped with a warning.
//!
//! # Saving
//!
//! `save` writes the header then every body row, each field quoted, with
//! CRLF terminators. Row shape is not validated on save.
//!
//! # Example
//!
//! ```no_run
//! use csv_dataset::{load, record_fields, save, AsDataset};
//! use std::path::Path;
//!
//! struct Reading {
//!     sensor: String,
//!     value: f64,
//! }
//!
//! record_fields!(Reading { sensor, value });
//!
//! let readings = vec![Reading { sensor: "a".to_string(), value: 1.5 }];
//! let path = Path::new("readings.csv");
//!
//! save(path, &readings.as_dataset()).unwrap();
//! assert_eq!(load(path).unwrap(), Some(readings.as_dataset()));
//! ```

// Module declarations
pub mod adapter;
pub mod cli;
pub mod io;
pub mod strategy;
pub mod types;

pub use adapter::{convert, convert_serialized, AsDataset, FieldMap, Record};
pub use io::{load, save};
pub use types::{Dataset, DatasetError, Row};
