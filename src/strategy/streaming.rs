//! Single-pass load strategy
//!
//! Fuses row counting and reading: the file is decoded once, and the
//! zero-row and header-only outcomes fall out of the iteration itself.

use crate::io::codec::read_dataset;
use crate::strategy::LoadStrategy;
use crate::types::{Dataset, DatasetError};
use std::fs::File;
use std::path::Path;

/// Single-pass load strategy
#[derive(Debug, Clone, Copy)]
pub struct StreamingLoader;

impl LoadStrategy for StreamingLoader {
    fn load(&self, path: &Path) -> Result<Option<Dataset>, DatasetError> {
        if !path.is_file() {
            return Ok(None);
        }

        let file = File::open(path).map_err(|e| DatasetError::file_access(path, &e))?;
        read_dataset(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use crate::strategy::TwoPassLoader;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_streaming_missing_file_is_none() {
        let result = StreamingLoader.load(Path::new("nonexistent.csv"));
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_streaming_header_only() {
        let file = create_temp_csv("\"only\"\r\n");
        let dataset = StreamingLoader.load(file.path()).unwrap().unwrap();
        assert_eq!(dataset, Dataset::header_only(row!["only"]));
    }

    #[rstest]
    #[case::empty("")]
    #[case::header_only("\"h\"\n")]
    #[case::body("\"h1\",\"h2\"\n\"1\",\"2\"\n\"3\",\"4\"\n")]
    #[case::malformed("\"h1\",\"h2\"\n\"1\"\n\"3\",\"4\"\n\"5\",\"6\",\"7\"\n")]
    #[case::multiline("\"h\"\n\"a\nb\"\n")]
    #[case::blank_lines("\"h\"\n\n\"1\"\r\n\r\n")]
    #[case::blank_lines_only("\n\n\n")]
    fn test_streaming_matches_two_pass(#[case] content: &str) {
        let file = create_temp_csv(content);
        assert_eq!(
            StreamingLoader.load(file.path()).unwrap(),
            TwoPassLoader.load(file.path()).unwrap()
        );
    }
}
