//! Row type
//!
//! A `Row` is one record of a delimited file: an ordered list of string
//! fields with no type or uniqueness constraint. An empty row is legal.

use std::fmt;

/// Build a [`Row`] from a list of `Display` values
///
/// ```
/// use csv_dataset::{row, Row};
///
/// let row = row!["id", 7, 1.5];
/// assert_eq!(row, Row::from(vec!["id", "7", "1.5"]));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::default()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Row::new(vec![$(::std::string::ToString::to_string(&$value)),+])
    };
}

/// One record of a delimited file
///
/// Equality is field-wise and ordered: two rows are equal when they have
/// the same number of fields and every field matches at the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row(Vec<String>);

impl Row {
    /// Create a row from owned field values
    pub fn new(values: Vec<String>) -> Self {
        Row(values)
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over the fields in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the fields as a slice
    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Consume the row, returning its fields
    pub fn into_values(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Row {
    fn from(values: Vec<String>) -> Self {
        Row(values)
    }
}

impl From<Vec<&str>> for Row {
    fn from(values: Vec<&str>) -> Self {
        Row(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&csv::StringRecord> for Row {
    fn from(record: &csv::StringRecord) -> Self {
        record.iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
