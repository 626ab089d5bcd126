//! Error types for the CSV dataset codec
//!
//! This module defines the errors that can surface from loading, saving and
//! converting datasets. Absence of a file and malformed body rows are not
//! errors: `load` reports the former as `Ok(None)` and skips the latter with
//! a warning.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: permission denied, path is a directory, disk full
//! - **CSV Parsing Errors**: undecodable content (e.g. invalid UTF-8)
//! - **CSV Writing Errors**: failures reported by the encoder
//! - **Serialization Errors**: records serde cannot flatten into a row

use std::path::Path;
use thiserror::Error;

/// Main error type for the dataset codec
///
/// Each variant carries enough context to print a useful one-line message
/// from the CLI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// A file could not be opened or created
    #[error("Cannot access '{path}': {message}")]
    FileAccess {
        /// The path that was being opened
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// I/O error occurred while reading or writing an already open stream
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The tokenizer rejected the input
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The encoder failed to write a row
    #[error("CSV write error: {message}")]
    WriteError {
        /// Description of the write failure
        message: String,
    },

    /// A record could not be flattened into a single row of strings
    #[error("Record serialization error: {message}")]
    SerializeError {
        /// Description of the serialization failure
        message: String,
    },
}

impl From<std::io::Error> for DatasetError {
    fn from(error: std::io::Error) -> Self {
        DatasetError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for DatasetError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return DatasetError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        DatasetError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl DatasetError {
    /// Create a FileAccess error for `path`
    pub fn file_access(path: &Path, error: &std::io::Error) -> Self {
        DatasetError::FileAccess {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a WriteError from an encoder failure
    pub fn write_error(error: impl std::fmt::Display) -> Self {
        DatasetError::WriteError {
            message: error.to_string(),
        }
    }

    /// Create a SerializeError from a serde failure
    pub fn serialize_error(error: impl std::fmt::Display) -> Self {
        DatasetError::SerializeError {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_access(
        DatasetError::FileAccess { path: "data.csv".to_string(), message: "Permission denied".to_string() },
        "Cannot access 'data.csv': Permission denied"
    )]
    #[case::io_error(
        DatasetError::IoError { message: "No space left on device".to_string() },
        "I/O error: No space left on device"
    )]
    #[case::parse_error_with_line(
        DatasetError::ParseError { line: Some(3), message: "invalid utf-8".to_string() },
        "CSV parse error at line 3: invalid utf-8"
    )]
    #[case::parse_error_without_line(
        DatasetError::ParseError { line: None, message: "invalid utf-8".to_string() },
        "CSV parse error: invalid utf-8"
    )]
    #[case::write_error(
        DatasetError::WriteError { message: "broken pipe".to_string() },
        "CSV write error: broken pipe"
    )]
    #[case::serialize_error(
        DatasetError::SerializeError { message: "cannot serialize maps".to_string() },
        "Record serialization error: cannot serialize maps"
    )]
    fn test_error_display(#[case] error: DatasetError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: DatasetError = io_error.into();
        assert!(matches!(error, DatasetError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_file_access_helper_keeps_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = DatasetError::file_access(Path::new("/tmp/out/data.csv"), &io_error);
        assert_eq!(
            error,
            DatasetError::FileAccess {
                path: "/tmp/out/data.csv".to_string(),
                message: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_csv_decode_error_conversion_has_line() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"\"a\"\n\"\xff\"\n"[..]);
        let error = reader
            .records()
            .find_map(Result::err)
            .expect("invalid utf-8 should fail to decode");

        let converted: DatasetError = error.into();
        assert!(matches!(
            converted,
            DatasetError::ParseError { line: Some(_), .. }
        ));
    }
}
