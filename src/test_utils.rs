//! Shared test utilities for session, catalog and command tests.
//!
//! `MockConnector` hands out `MockBackend` handles that share one scripted
//! state: tests queue results, inject failures, drop the live handle out of
//! band and inspect every statement that reached the "server".

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::TempDir;

use crate::audit::AuditLog;
use crate::db::{
    BackendError, ConnectionConfig, Connector, DatabaseBackend, QueryResult, Session, SqlValue,
};

/// A statement as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

#[derive(Debug, Default)]
struct MockState {
    connect_error: Option<String>,
    next_error: Option<String>,
    results: VecDeque<QueryResult>,
    affected: u64,
    executed: Vec<Executed>,
    connects: usize,
    closes: usize,
    /// Generation of the handle currently considered alive.
    live_generation: Option<usize>,
}

/// Connector whose handles are driven by the test.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    state: Arc<Mutex<MockState>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every following connect attempt fail with `message`.
    pub fn fail_connects(&self, message: &str) {
        self.state().connect_error = Some(message.to_string());
    }

    pub fn allow_connects(&self) {
        self.state().connect_error = None;
    }

    /// Make the next statement fail with `message`.
    pub fn fail_next(&self, message: &str) {
        self.state().next_error = Some(message.to_string());
    }

    /// Queue a result for the next read statement.
    pub fn push_result(&self, result: QueryResult) {
        self.state().results.push_back(result);
    }

    /// Affected-row count reported by write statements.
    pub fn set_affected(&self, affected: u64) {
        self.state().affected = affected;
    }

    /// Kill the current handle as if the server had closed it.
    pub fn drop_connection(&self) {
        self.state().live_generation = None;
    }

    pub fn executed(&self) -> Vec<Executed> {
        self.state().executed.clone()
    }

    pub fn connect_count(&self) -> usize {
        self.state().connects
    }

    pub fn close_count(&self) -> usize {
        self.state().closes
    }
}

impl Connector for MockConnector {
    fn connect(&self, _config: &ConnectionConfig) -> Result<Box<dyn DatabaseBackend>, BackendError> {
        let mut state = self.state();
        if let Some(message) = &state.connect_error {
            return Err(message.clone().into());
        }
        state.connects += 1;
        let generation = state.connects;
        state.live_generation = Some(generation);
        Ok(Box::new(MockBackend {
            state: Arc::clone(&self.state),
            generation,
        }))
    }
}

/// Handle produced by `MockConnector`.
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
    generation: usize,
}

impl MockBackend {
    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn run(&self, sql: &str, params: &[SqlValue]) -> Result<MutexGuard<'_, MockState>, BackendError> {
        let mut state = self.state();
        if state.live_generation != Some(self.generation) {
            return Err("connection closed".into());
        }
        if let Some(message) = state.next_error.take() {
            return Err(message.into());
        }
        state.executed.push(Executed {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        Ok(state)
    }
}

impl DatabaseBackend for MockBackend {
    fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryResult, BackendError> {
        let mut state = self.run(sql, params)?;
        Ok(state.results.pop_front().unwrap_or_default())
    }

    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64, BackendError> {
        let state = self.run(sql, params)?;
        Ok(state.affected)
    }

    fn is_alive(&mut self) -> bool {
        self.state().live_generation == Some(self.generation)
    }

    fn close(self: Box<Self>) -> Result<(), BackendError> {
        let mut state = self.state();
        state.closes += 1;
        if state.live_generation == Some(self.generation) {
            state.live_generation = None;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "Mock"
    }
}

/// An audit log inside a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the log is used.
pub fn temp_audit_log() -> (AuditLog, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let log = AuditLog::new(dir.path().join("sql_commands.log"), false);
    (log, dir)
}

/// A session over a fresh `MockConnector` and temp audit log.
pub fn mock_session() -> (Session, MockConnector, TempDir) {
    let (audit, dir) = temp_audit_log();
    let connector = MockConnector::new();
    let session = Session::with_connector(
        ConnectionConfig::default(),
        audit,
        Box::new(connector.clone()),
    );
    (session, connector, dir)
}
