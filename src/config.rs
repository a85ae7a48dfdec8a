//! Configuration loading.
//!
//! Settings are layered, each source overriding the one before it:
//! built-in defaults, then the environment, then `.precinct.json` in the
//! current directory, then command-line flags. The JSON file and the
//! command line share one partial shape (`ConfigFile`), so every field in
//! either is optional.
//!
//! ```json
//! {
//!   "database": {
//!     "host": "localhost",
//!     "port": 5432,
//!     "user": "detective",
//!     "password": "nine-nine",
//!     "database": "mini_world_db"
//!   },
//!   "audit": { "log_path": "sql_commands.log", "echo": true }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::audit::AuditConfig;
use crate::db::ConnectionConfig;

pub const CONFIG_FILE_NAME: &str = ".precinct.json";

/// Environment variable overriding the audit log path.
pub const AUDIT_LOG_ENV: &str = "PRECINCT_AUDIT_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid connection string: {message}")]
    InvalidUrl { message: String },

    #[error("Invalid port '{value}'")]
    InvalidPort { value: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Connection fields that may be overridden. `url` is applied before the
/// individual fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub connect_timeout_secs: Option<u64>,
}

impl DatabaseSection {
    pub fn apply_to(&self, config: &mut ConnectionConfig) -> Result<(), ConfigError> {
        if let Some(url) = &self.url {
            *config = ConnectionConfig::from_url(url)?;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(timeout) = self.connect_timeout_secs {
            config.connect_timeout_secs = timeout;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSection {
    pub log_path: Option<PathBuf>,
    pub echo: Option<bool>,
}

impl AuditSection {
    pub fn apply_to(&self, config: &mut AuditConfig) {
        if let Some(path) = &self.log_path {
            config.log_path = path.clone();
        }
        if let Some(echo) = self.echo {
            config.echo = echo;
        }
    }
}

/// A partial configuration, as found in `.precinct.json` or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    pub audit: AuditSection,
}

impl ConfigFile {
    /// Load `.precinct.json` from the current directory, if present.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load a config file. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn apply_to(&self, settings: &mut Settings) -> Result<(), ConfigError> {
        self.database.apply_to(&mut settings.database)?;
        self.audit.apply_to(&mut settings.audit);
        Ok(())
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub database: ConnectionConfig,
    pub audit: AuditConfig,
}

impl Settings {
    /// Resolve from the real environment and `.precinct.json`.
    pub fn resolve(cli: &ConfigFile) -> Result<Self, ConfigError> {
        let file = ConfigFile::load()?;
        Self::resolve_with(|key| std::env::var(key).ok(), file.as_ref(), cli)
    }

    pub fn resolve_with<F>(lookup: F, file: Option<&ConfigFile>, cli: &ConfigFile) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        settings.database.apply_env_with(&lookup)?;
        if let Some(path) = lookup(AUDIT_LOG_ENV) {
            settings.audit.log_path = PathBuf::from(path);
        }

        if let Some(file) = file {
            file.apply_to(&mut settings)?;
        }
        cli.apply_to(&mut settings)?;

        Ok(settings)
    }
}
