//! Record-to-dataset conversion
//!
//! Three ways to describe a record's fields, all preserving the order in
//! which fields are declared:
//!
//! - [`convert`]: types implementing [`Record`] (usually via `record_fields!`)
//! - [`FieldMap`]: an ordered list of named extractor closures, for types
//!   that cannot implement `Record`
//! - [`convert_serialized`]: types deriving `serde::Serialize`, using serde's
//!   field order
//!
//! Conversion never touches storage.

use crate::adapter::traits::Record;
use crate::io::codec::read_dataset;
use crate::types::{Dataset, DatasetError, Row};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Display;

/// Convert records into a dataset
///
/// The header is `T::FIELD_NAMES`; each body row holds the record's field
/// values in the same order.
///
/// # Examples
///
/// ```
/// use csv_dataset::{convert, record_fields, row};
///
/// struct Reading {
///     attr1: u32,
///     attr2: u32,
/// }
///
/// record_fields!(Reading { attr1, attr2 });
///
/// let dataset = convert(&[Reading { attr1: 0, attr2: 1 }]);
/// assert_eq!(dataset.header, row!["attr1", "attr2"]);
/// assert_eq!(dataset.body, vec![row!["0", "1"]]);
/// ```
pub fn convert<'a, T, I>(records: I) -> Dataset
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let body = records.into_iter().map(Record::to_row).collect();
    Dataset::new(T::header(), body)
}

/// Ordered list of named field extractors
///
/// # Examples
///
/// ```
/// use csv_dataset::{row, FieldMap};
///
/// let fields = FieldMap::new()
///     .field("name", |p: &(String, u8)| p.0.clone())
///     .field("age", |p: &(String, u8)| p.1);
///
/// let people = vec![("Ada".to_string(), 36)];
/// let dataset = fields.convert(&people);
/// assert_eq!(dataset.header, row!["name", "age"]);
/// assert_eq!(dataset.body, vec![row!["Ada", "36"]]);
/// ```
pub struct FieldMap<'a, T> {
    fields: Vec<(String, Box<dyn Fn(&T) -> String + 'a>)>,
}

impl<'a, T> FieldMap<'a, T> {
    /// Creates an empty field map
    pub fn new() -> Self {
        FieldMap { fields: Vec::new() }
    }

    /// Appends a field; the accessor's result is rendered with `Display`
    pub fn field<V, F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> V + 'a,
        V: Display + 'a,
        T: 'a,
    {
        self.fields.push((
            name.into(),
            Box::new(move |record: &T| accessor(record).to_string()),
        ));
        self
    }

    /// Header row made of the field names
    pub fn header(&self) -> Row {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Body row for one record
    pub fn row(&self, record: &T) -> Row {
        self.fields.iter().map(|(_, extract)| extract(record)).collect()
    }

    /// Convert records into a dataset
    pub fn convert<'r, I>(&self, records: I) -> Dataset
    where
        T: 'r,
        I: IntoIterator<Item = &'r T>,
    {
        let body = records.into_iter().map(|record| self.row(record)).collect();
        Dataset::new(self.header(), body)
    }
}

impl<T> Default for FieldMap<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert serde-serializable structs into a dataset
///
/// The header comes from the struct's field names in declaration order and
/// each cell is the value as the `csv` serializer writes it. `T` must be a
/// struct with named fields of scalar types. An empty input yields an empty
/// dataset, since field names are only known once a record is serialized.
///
/// # Errors
///
/// Returns `DatasetError::SerializeError` if a record cannot be flattened
/// into a single row (e.g. it contains a map or a nested sequence).
pub fn convert_serialized<T: Serialize>(records: &[T]) -> Result<Dataset, DatasetError> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    for record in records {
        writer
            .serialize(record)
            .map_err(DatasetError::serialize_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DatasetError::serialize_error(e.error()))?;

    Ok(read_dataset(bytes.as_slice())?.unwrap_or_default())
}
