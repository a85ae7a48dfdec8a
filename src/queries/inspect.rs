//! Ad-hoc schema inspection.
//!
//! Table names are never taken from the caller verbatim: `resolve_table`
//! checks the name against the tables the server reports and only then hands
//! out a `TableName`, which is the sole way to reach `describe_table` and
//! `select_all`.

use std::fmt;

use crate::db::{quote_identifier, DatabaseValue, DbError, Session, SqlValue};
use crate::types::TabularResult;

const LIST_TABLES: &str = "
    SELECT table_name::text AS table_name
    FROM information_schema.tables
    WHERE table_schema = current_schema()
      AND table_type = 'BASE TABLE'
    ORDER BY table_name";

const DESCRIBE_TABLE: &str = "
    SELECT column_name::text AS column_name,
           data_type::text AS data_type,
           is_nullable::text AS is_nullable,
           column_default::text AS column_default
    FROM information_schema.columns
    WHERE table_schema = current_schema()
      AND table_name::text = $1
    ORDER BY ordinal_position";

/// A table name confirmed to exist on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base tables of the current schema, ordered by name.
pub fn list_tables(session: &mut Session) -> Result<TabularResult, DbError> {
    session.run_query(LIST_TABLES, &[])
}

fn table_names(session: &mut Session) -> Result<Vec<String>, DbError> {
    let tables = list_tables(session)?;
    Ok(tables
        .into_rows()
        .into_iter()
        .filter_map(|row| row.get("table_name").and_then(DatabaseValue::as_string))
        .collect())
}

/// Look `name` up among the server's tables.
///
/// An exact match wins. Otherwise a single case-insensitive match is
/// accepted, since unquoted identifiers are folded to lower case.
pub fn resolve_table(session: &mut Session, name: &str) -> Result<TableName, DbError> {
    let names = table_names(session)?;

    if let Some(exact) = names.iter().find(|n| n.as_str() == name) {
        return Ok(TableName(exact.clone()));
    }

    let mut folded = names.iter().filter(|n| n.eq_ignore_ascii_case(name));
    match (folded.next(), folded.next()) {
        (Some(only), None) => Ok(TableName(only.clone())),
        _ => Err(DbError::UnknownTable {
            name: name.to_string(),
        }),
    }
}

/// Column name, type, nullability and default, in ordinal order.
pub fn describe_table(session: &mut Session, table: &TableName) -> Result<TabularResult, DbError> {
    session.run_query(DESCRIBE_TABLE, &[SqlValue::from(table.as_str())])
}

pub fn select_all(session: &mut Session, table: &TableName) -> Result<TabularResult, DbError> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table.as_str()));
    session.run_query(&sql, &[])
}
