//! Database connection and query utilities.
//!
//! This module provides the database access layer:
//! - Connection management with lazy reconnect (`Session`)
//! - Statement execution with bound parameters
//! - A backend trait so tests can run without a server
//!
//! # Architecture
//!
//! A `Session` owns one `ConnectionConfig`, one `AuditLog` and at most one
//! live `DatabaseBackend` handle. Before every statement it checks that the
//! handle is alive and reconnects if not, records the statement in the audit
//! log, then executes it. Reads come back as a `QueryResult` that the caller
//! projects into a `TabularResult`; writes return the affected-row count.
//!
//! # Type Decisions
//!
//! **Why a closed `SqlValue` enum instead of `Box<dyn ToSql>`?**
//! Every argument must also be rendered into the audit log, and every cell
//! must be serializable for output. A closed enum gives both for free and
//! keeps the backend trait object-safe.
//!
//! **Why `i64` for identifiers?**
//! Identifiers are accepted as the caller provides them. Binding narrows to
//! the column's integer width and the server rejects anything out of range.

mod backend;
mod config;
mod connection;
mod escape;
pub mod postgres;
mod value;

pub use backend::{BackendError, Connector, DatabaseBackend, QueryResult};
pub use config::ConnectionConfig;
pub use connection::{ConnectionState, Session};
pub use escape::{quote_identifier, quote_literal};
pub use value::{DatabaseValue, SqlValue};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Query Error: {message}")]
    Query { message: String },

    #[error("Update Error: {message}")]
    Update { message: String },

    #[error("Statement '{name}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Statement '{name}' is a {kind} statement and cannot be run as a {requested}")]
    WrongKind {
        name: String,
        kind: &'static str,
        requested: &'static str,
    },

    #[error("Unknown table '{name}'")]
    UnknownTable { name: String },
}
