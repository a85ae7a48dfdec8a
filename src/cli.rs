//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and the global flags.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::audit::EchoStream;
use crate::commands::Command;
use crate::config::{AuditSection, ConfigFile, DatabaseSection};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Precinct case database: catalog queries with an audit trail", long_about = None)]
pub struct Args {
    /// Database host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Database port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Database user
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Database password
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Database name
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Path of the SQL audit log
    #[arg(long, global = true)]
    pub audit_log: Option<PathBuf>,

    /// Echo every executed statement as `[SQL] ...;` (stdout for table output, stderr otherwise)
    #[arg(long, global = true)]
    pub echo: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Enable debug diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Keep echoed statements out of machine-readable output.
    pub fn echo_stream(&self) -> EchoStream {
        match self.format {
            OutputFormat::Table => EchoStream::Stdout,
            OutputFormat::Json | OutputFormat::Toon => EchoStream::Stderr,
        }
    }

    /// The command-line layer of the configuration.
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            database: DatabaseSection {
                host: self.host.clone(),
                port: self.port,
                user: self.user.clone(),
                password: self.password.clone(),
                database: self.database.clone(),
                ..Default::default()
            },
            audit: AuditSection {
                log_path: self.audit_log.clone(),
                echo: self.echo.then_some(true),
            },
        }
    }
}
