//! Database backend trait for abstracting the connection handle.
//!
//! The session only ever talks to a `Box<dyn DatabaseBackend>`, obtained from a
//! `Connector`. Production code uses the PostgreSQL implementation; tests use
//! a scripted mock so session behaviour can be checked without a server.

use std::error::Error;

use super::config::ConnectionConfig;
use super::value::SqlValue;

/// Error type returned by backend implementations.
///
/// The session maps these into `DbError` variants depending on which
/// operation failed.
pub type BackendError = Box<dyn Error + Send + Sync>;

/// Raw result of a read statement.
///
/// `headers` are the column names in server order, present even when `rows`
/// is empty. Each row holds one value per header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

/// A single live connection handle.
pub trait DatabaseBackend: Send {
    /// Execute a read statement with bound parameters, returning all rows.
    fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryResult, BackendError>;

    /// Execute a write statement with bound parameters.
    ///
    /// Returns the number of rows the server reports as affected.
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64, BackendError>;

    /// Liveness check. `false` once the handle is closed or unusable.
    fn is_alive(&mut self) -> bool;

    /// Release the handle.
    fn close(self: Box<Self>) -> Result<(), BackendError>;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// Opens new handles from a configuration bundle.
pub trait Connector: Send {
    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn DatabaseBackend>, BackendError>;
}
