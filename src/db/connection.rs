//! Database connection management.
//!
//! `Session` holds at most one live handle and re-establishes it lazily: every
//! statement first runs a liveness check and reconnects once if the handle is
//! gone. There is no retry beyond that single reconnect.

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::backend::{Connector, DatabaseBackend};
use super::config::ConnectionConfig;
use super::postgres::PostgresConnector;
use super::value::SqlValue;
use super::DbError;
use crate::audit::{AuditLog, LoggingError};
use crate::types::TabularResult;

/// Audit failures kept for `take_warnings`; older ones are dropped first.
pub const MAX_PENDING_WARNINGS: usize = 64;

/// Whether a session currently holds a handle.
///
/// A `Connected` session may still hold a handle that has dropped on the
/// server side; that is only discovered by the next liveness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// One connection to the database plus the audit log it writes to.
///
/// Not meant for concurrent use; one session per front-end instance.
pub struct Session {
    config: ConnectionConfig,
    connector: Box<dyn Connector>,
    handle: Option<Box<dyn DatabaseBackend>>,
    audit: AuditLog,
    warnings: VecDeque<LoggingError>,
}

impl Session {
    /// Create a PostgreSQL session. Does not connect until first use.
    pub fn new(config: ConnectionConfig, audit: AuditLog) -> Self {
        Self::with_connector(config, audit, Box::new(PostgresConnector))
    }

    pub fn with_connector(
        config: ConnectionConfig,
        audit: AuditLog,
        connector: Box<dyn Connector>,
    ) -> Self {
        Self {
            config,
            connector,
            handle: None,
            audit,
            warnings: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    pub fn state(&self) -> ConnectionState {
        if self.handle.is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Open a new handle, replacing any existing one.
    ///
    /// Returns a confirmation message on success. On failure the session is
    /// left `Disconnected` and the driver's error text is returned.
    pub fn connect(&mut self) -> Result<String, DbError> {
        self.close();

        match self.connector.connect(&self.config) {
            Ok(handle) => {
                debug!(
                    backend = handle.backend_name(),
                    db = %self.config.describe(),
                    "connected"
                );
                self.handle = Some(handle);
                Ok(format!("Connected successfully to {}.", self.config.describe()))
            }
            Err(e) => Err(DbError::Connection {
                message: e.to_string(),
            }),
        }
    }

    /// Make sure a live handle is present, reconnecting if it is missing or dead.
    pub fn ensure_connected(&mut self) -> Result<(), DbError> {
        let alive = match self.handle.as_mut() {
            Some(handle) => handle.is_alive(),
            None => false,
        };
        if alive {
            return Ok(());
        }

        if self.handle.take().is_some() {
            debug!(db = %self.config.describe(), "connection lost, reconnecting");
        }
        self.connect().map(|_| ())
    }

    /// Release the handle if one is open. Safe to call repeatedly.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                warn!(error = %e, "failed to close connection cleanly");
            }
            debug!(db = %self.config.describe(), "connection closed");
        }
    }

    /// Run a read statement and project the rows into a table.
    ///
    /// Also the escape hatch for trusted introspection statements; never pass
    /// raw user text as `sql`.
    pub fn run_query(&mut self, sql: &str, args: &[SqlValue]) -> Result<TabularResult, DbError> {
        self.ensure_connected()?;
        self.record(sql, args);

        let handle = self.live_handle()?;
        let raw = handle.query(sql, args).map_err(|e| DbError::Query {
            message: e.to_string(),
        })?;
        Ok(TabularResult::from_query_result(raw))
    }

    /// Run a write statement, returning the affected-row count.
    pub fn run_update(&mut self, sql: &str, args: &[SqlValue]) -> Result<u64, DbError> {
        self.ensure_connected()?;
        self.record(sql, args);

        let handle = self.live_handle()?;
        handle.execute(sql, args).map_err(|e| DbError::Update {
            message: e.to_string(),
        })
    }

    /// Drain audit failures collected since the last call.
    ///
    /// At most `MAX_PENDING_WARNINGS` are held; every failure is also
    /// reported through `tracing` as it happens.
    pub fn take_warnings(&mut self) -> Vec<LoggingError> {
        self.warnings.drain(..).collect()
    }

    fn record(&mut self, sql: &str, args: &[SqlValue]) {
        if let Err(e) = self.audit.record(sql, args) {
            warn!(error = %e, "audit log write failed; statement still executed");
            if self.warnings.len() == MAX_PENDING_WARNINGS {
                self.warnings.pop_front();
            }
            self.warnings.push_back(e);
        }
    }

    fn live_handle(&mut self) -> Result<&mut (dyn DatabaseBackend + 'static), DbError> {
        self.handle
            .as_deref_mut()
            .ok_or_else(|| DbError::Connection {
                message: "no open connection".to_string(),
            })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
