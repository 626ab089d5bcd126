//! Load strategy module
//!
//! This module defines the Strategy pattern for turning a delimited file into
//! a [`Dataset`]. Two implementations are provided and can be selected at
//! runtime:
//!
//! - [`TwoPassLoader`]: counts rows with a full decode, then decodes again to
//!   build the dataset (the default used by [`crate::load`])
//! - [`StreamingLoader`]: builds the dataset in a single decode
//!
//! Both return identical results for the same file.

use crate::cli::StrategyType;
use crate::types::{Dataset, DatasetError};
use std::path::Path;

pub mod streaming;
pub mod two_pass;

pub use streaming::StreamingLoader;
pub use two_pass::TwoPassLoader;

/// Load strategy trait for reading a dataset from a file
pub trait LoadStrategy: Send + Sync {
    /// Load a dataset from `path`
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if `path` is not an existing regular file or holds no rows
    /// * `Ok(Some(dataset))` with the first row as header and every conforming
    ///   body row in file order
    /// * `Err(DatasetError)` if the file cannot be opened or decoded
    ///
    /// Body rows with the wrong field count are logged and skipped; they
    /// never cause this method to return an error.
    fn load(&self, path: &Path) -> Result<Option<Dataset>, DatasetError>;
}

/// Create a load strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of load strategy to create
///
/// # Returns
///
/// A boxed trait object implementing the LoadStrategy trait
pub fn create_loader(strategy_type: StrategyType) -> Box<dyn LoadStrategy> {
    match strategy_type {
        StrategyType::TwoPass => Box::new(TwoPassLoader),
        StrategyType::Streaming => Box::new(StreamingLoader),
    }
}
