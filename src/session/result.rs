//! Normalized row/column results.

use std::rc::Rc;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::value::FieldValue;

/// Shared, reference-counted string used for column names.
///
/// Every row of one result points at the same allocation per column, so a
/// large result set stores each name once.
pub type SharedStr = Rc<str>;

/// Column names interned once per decode call.
#[derive(Debug, Clone, Default)]
pub struct ColumnPool {
    names: Vec<SharedStr>,
}

impl ColumnPool {
    pub fn new(columns: &[String]) -> Self {
        Self {
            names: columns.iter().map(|c| SharedStr::from(c.as_str())).collect(),
        }
    }

    /// The interned name at `index`; cloning it only bumps the refcount.
    pub fn get(&self, index: usize) -> Option<&SharedStr> {
        self.names.get(index)
    }

    pub fn names(&self) -> &[SharedStr] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One row: column name to decoded value, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedRow {
    entries: Vec<(SharedStr, FieldValue)>,
}

impl NormalizedRow {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value. A repeated column name overwrites the earlier value
    /// in place, so a row never holds the same key twice.
    pub fn insert(&mut self, column: SharedStr, value: FieldValue) {
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_ref() == column)
            .map(|(_, value)| value)
    }

    /// Interned column names in order.
    pub fn keys(&self) -> impl Iterator<Item = &SharedStr> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_ref(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NormalizedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_ref(), value)?;
        }
        map.end()
    }
}

/// The full, eagerly materialized result of a query.
///
/// Every row carries exactly the columns of `columns`, in that order. A
/// result with no columns never carries rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedResult {
    columns: Vec<SharedStr>,
    rows: Vec<NormalizedRow>,
}

impl NormalizedResult {
    /// A result without columns or rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result with the pool's columns declared and no rows yet.
    pub fn with_columns(pool: &ColumnPool, row_capacity: usize) -> Self {
        Self {
            columns: pool.names().to_vec(),
            rows: Vec::with_capacity(row_capacity),
        }
    }

    pub(crate) fn push(&mut self, row: NormalizedRow) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[SharedStr] {
        &self.columns
    }

    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<NormalizedRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a NormalizedResult {
    type Item = &'a NormalizedRow;
    type IntoIter = std::slice::Iter<'a, NormalizedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
