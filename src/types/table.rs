//! Generic tabular results.
//!
//! Every read operation returns a `TabularResult`: the column names in the
//! order the server reported them and the rows in the order they arrived.
//! Nothing is re-sorted here.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::db::{QueryResult, SqlValue};

/// A single row, mapping column name to value in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, SqlValue)>,
}

impl Record {
    pub fn new(fields: Vec<(String, SqlValue)>) -> Self {
        Self { fields }
    }

    /// Value of the first column with this name.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn fields(&self) -> &[(String, SqlValue)] {
        &self.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Column names plus rows, owned entirely by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TabularResult {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl TabularResult {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    /// Project a raw result set into named records.
    ///
    /// Rows shorter than the header are padded with `NULL`; surplus values
    /// without a column name are dropped.
    pub fn from_query_result(raw: QueryResult) -> Self {
        let QueryResult { headers, rows } = raw;
        let rows = rows
            .into_iter()
            .map(|values| {
                let mut values = values.into_iter();
                let fields = headers
                    .iter()
                    .map(|name| (name.clone(), values.next().unwrap_or(SqlValue::Null)))
                    .collect();
                Record::new(fields)
            })
            .collect();

        Self {
            columns: headers,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Vec<&SqlValue> {
        self.rows.iter().filter_map(|row| row.get(name)).collect()
    }
}
