//! Traits for turning typed records into rows
//!
//! A record type lists its fields once, in declaration order, and produces
//! the matching string values. The [`record_fields!`](crate::record_fields)
//! macro writes that implementation from the field list.

use crate::adapter::convert::convert;
use crate::types::{Dataset, Row};

/// Implement [`Record`] for a struct from an ordered list of its fields
///
/// Each listed field must implement `Display`. The header uses the field
/// identifiers verbatim, in the order given. An empty list gives an empty
/// header and empty rows.
///
/// ```
/// use csv_dataset::{record_fields, Record};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// record_fields!(Point { x, y });
///
/// assert_eq!(Point::FIELD_NAMES, &["x", "y"]);
/// assert_eq!(Point { x: 0, y: 1 }.field_values(), vec!["0", "1"]);
/// ```
#[macro_export]
macro_rules! record_fields {
    ($record:ty { $($field:ident),* $(,)? }) => {
        impl $crate::adapter::Record for $record {
            const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($field)),*];

            fn field_values(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![$(::std::string::ToString::to_string(&self.$field)),*]
            }
        }
    };
}

/// A typed record with an ordered list of named fields
pub trait Record {
    /// Field names in declaration order
    const FIELD_NAMES: &'static [&'static str];

    /// String form of each field, in the same order as `FIELD_NAMES`
    fn field_values(&self) -> Vec<String>;

    /// Header row for this record type
    fn header() -> Row {
        Row::from(Self::FIELD_NAMES.to_vec())
    }

    /// Body row for this record
    fn to_row(&self) -> Row {
        Row::new(self.field_values())
    }
}

/// Convert a collection of records into a dataset
pub trait AsDataset {
    /// Header from the record type, one body row per record
    fn as_dataset(&self) -> Dataset;
}

impl<T: Record> AsDataset for [T] {
    fn as_dataset(&self) -> Dataset {
        convert(self)
    }
}
