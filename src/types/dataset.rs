//! Dataset type
//!
//! A `Dataset` is a header row plus the body rows positionally correlated to
//! it. Body rows are expected to share the header's field count; decoding
//! enforces this by dropping non-conforming rows, encoding does not check.

use super::row::Row;

/// One header row and an ordered list of body rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dataset {
    /// Column names
    pub header: Row,

    /// Records in file order
    pub body: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from a header and body rows
    pub fn new(header: Row, body: Vec<Row>) -> Self {
        Dataset { header, body }
    }

    /// Create a dataset with a header and no body rows
    pub fn header_only(header: Row) -> Self {
        Dataset {
            header,
            body: Vec::new(),
        }
    }

    /// Number of columns declared by the header
    pub fn field_count(&self) -> usize {
        self.header.len()
    }

    /// Number of body rows
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the dataset has no body rows
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Append a body row
    pub fn push(&mut self, row: Row) {
        self.body.push(row);
    }

    /// Iterate over the header followed by every body row
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.body.iter())
    }

    /// Indices of body rows whose field count differs from the header
    ///
    /// Such rows are written by `save` as-is and dropped by the next `load`.
    pub fn nonconforming_rows(&self) -> Vec<usize> {
        let field_count = self.field_count();
        self.body
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != field_count)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn sample() -> Dataset {
        Dataset::new(
            row!["h1", "h2", "h3"],
            vec![row!["b1v1", "b1v2", "b1v3"], row!["b2v1", "b2v2", "b2v3"]],
        )
    }

    #[test]
    fn test_dataset_equality_is_ordered() {
        let mut reordered = sample();
        reordered.body.reverse();

        assert_eq!(sample(), sample());
        assert_ne!(sample(), reordered);
    }

    #[test]
    fn test_dataset_header_difference() {
        let mut other = sample();
        other.header = row!["h1", "h2", "h4"];
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_header_only() {
        let dataset = Dataset::header_only(row!["a", "b"]);
        assert_eq!(dataset.field_count(), 2);
        assert!(dataset.is_empty());
        assert_eq!(dataset.rows().count(), 1);
    }

    #[test]
    fn test_rows_yields_header_first() {
        let dataset = sample();
        let rows: Vec<&Row> = dataset.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &dataset.header);
        assert_eq!(rows[2], &dataset.body[1]);
    }

    #[test]
    fn test_nonconforming_rows() {
        let mut dataset = sample();
        dataset.push(row!["short"]);
        dataset.push(row!["x", "y", "z"]);
        dataset.push(row!["a", "b", "c", "d"]);

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.nonconforming_rows(), vec![2, 4]);
        assert!(sample().nonconforming_rows().is_empty());
    }
}
