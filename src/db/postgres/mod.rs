//! PostgreSQL backend implementation.
//!
//! Wraps the synchronous `postgres::Client`. Every call blocks until the
//! server answers; the session above it never shares the client between
//! threads.

mod conversion;

use std::time::Duration;

use postgres::types::ToSql;
use postgres::{Client, NoTls};

use super::backend::{BackendError, Connector, DatabaseBackend, QueryResult};
use super::config::ConnectionConfig;
use super::value::SqlValue;

pub use conversion::row_values;

/// Upper bound on the per-call liveness probe.
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(2);

/// Backend over a single `postgres::Client`.
pub struct PostgresBackend {
    client: Client,
}

impl PostgresBackend {
    /// Open a new connection.
    ///
    /// # Errors
    /// Returns the driver error when the host is unreachable, the credentials
    /// are rejected or the database does not exist.
    pub fn connect(config: &ConnectionConfig) -> Result<Self, postgres::Error> {
        let client = Self::pg_config(config).connect(NoTls)?;
        Ok(Self { client })
    }

    fn pg_config(config: &ConnectionConfig) -> postgres::Config {
        let mut pg = postgres::Config::new();
        pg.host(&config.host)
            .port(config.port)
            .user(&config.user)
            .dbname(&config.database)
            .application_name("precinct_db")
            .connect_timeout(config.connect_timeout());
        if !config.password.is_empty() {
            pg.password(&config.password);
        }
        pg
    }
}

fn param_refs(params: &[SqlValue]) -> Vec<&(dyn ToSql + Sync)> {
    params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
}

impl DatabaseBackend for PostgresBackend {
    fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryResult, BackendError> {
        // Preparing first gives the column list even when no rows come back
        let statement = self.client.prepare(sql)?;
        let headers = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let rows = self.client.query(&statement, &param_refs(params))?;
        let rows = rows
            .iter()
            .map(|row| row_values(row, statement.columns()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QueryResult { headers, rows })
    }

    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64, BackendError> {
        Ok(self.client.execute(sql, &param_refs(params))?)
    }

    fn is_alive(&mut self) -> bool {
        !self.client.is_closed() && self.client.is_valid(LIVENESS_TIMEOUT).is_ok()
    }

    fn close(self: Box<Self>) -> Result<(), BackendError> {
        Ok(self.client.close()?)
    }

    fn backend_name(&self) -> &'static str {
        "Postgres"
    }
}

/// Connector producing `PostgresBackend` handles.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresConnector;

impl Connector for PostgresConnector {
    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn DatabaseBackend>, BackendError> {
        let backend = PostgresBackend::connect(config)?;
        Ok(Box::new(backend))
    }
}
