//! Append-only audit log of executed statements.
//!
//! Every statement the session runs is rendered with its arguments
//! substituted in place and appended as one line:
//!
//! ```text
//! [2024-10-31 21:04:55] UPDATE Case_File SET status = 'Closed' WHERE case_id = 500;
//! ```
//!
//! The file is opened, appended to and closed on every record; no handle is
//! kept between calls. Rendering is for the record only; execution always
//! uses bound parameters.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::SqlValue;

pub const DEFAULT_LOG_PATH: &str = "sql_commands.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CONSOLE_PREFIX: &str = "[SQL]";

/// Where the audit log lives and whether entries are echoed to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub log_path: PathBuf,
    pub echo: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            echo: false,
        }
    }
}

/// The audit file could not be written or read.
///
/// Never fatal to the database operation that triggered it.
#[derive(Error, Debug)]
#[error("Failed to access audit log '{}': {}", .path.display(), .source)]
pub struct LoggingError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// One parsed line of the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    /// `YYYY-MM-DD HH:MM:SS`, empty if the line did not carry one.
    pub timestamp: String,
    pub statement: String,
}

/// Console stream that receives echoed statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EchoStream {
    #[default]
    Stdout,
    Stderr,
}

/// Handle to the audit log file.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
    echo: bool,
    echo_stream: EchoStream,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>, echo: bool) -> Self {
        Self {
            path: path.into(),
            echo,
            echo_stream: EchoStream::default(),
        }
    }

    /// Send echoed statements to `stream` instead of stdout.
    pub fn echo_to(mut self, stream: EchoStream) -> Self {
        self.echo_stream = stream;
        self
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.log_path.clone(), config.echo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    pub fn echo_stream(&self) -> EchoStream {
        self.echo_stream
    }

    /// Render `template` with `args` and append it to the log.
    ///
    /// Returns the rendered statement. The console echo, when enabled,
    /// happens even if the file append fails.
    pub fn record(&self, template: &str, args: &[SqlValue]) -> Result<String, LoggingError> {
        match self.echo_stream {
            EchoStream::Stdout => self.record_with_console(template, args, &mut io::stdout().lock()),
            EchoStream::Stderr => self.record_with_console(template, args, &mut io::stderr().lock()),
        }
    }

    fn record_with_console(
        &self,
        template: &str,
        args: &[SqlValue],
        console: &mut dyn Write,
    ) -> Result<String, LoggingError> {
        let statement = render_statement(template, args);
        let line = format_line(&Local::now().naive_local(), &statement);

        if self.echo {
            // Console write failures are ignored; the file append still runs
            let _ = writeln!(console, "{}", console_line(&statement));
        }

        self.append(&line)?;
        Ok(statement)
    }

    fn append(&self, line: &str) -> Result<(), LoggingError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.error(source))?;
        writeln!(file, "{}", line).map_err(|source| self.error(source))
    }

    /// All entries in file order (oldest first). A missing file has none.
    pub fn entries(&self) -> Result<Vec<AuditEntry>, LoggingError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.error(source)),
        };

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_line)
            .collect())
    }

    /// The last `limit` entries, still oldest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AuditEntry>, LoggingError> {
        let mut entries = self.entries()?;
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }

    fn error(&self, source: io::Error) -> LoggingError {
        LoggingError {
            path: self.path.clone(),
            source,
        }
    }
}

/// Substitute positional placeholders with argument literals.
///
/// Whitespace outside quoted literals collapses to single spaces so the
/// statement fits on one line. `$n` maps to `args[n - 1]`; a placeholder with
/// no matching argument is left untouched. Substituted text is never
/// rescanned, so arguments containing `$1` stay literal.
pub fn render_statement(template: &str, args: &[SqlValue]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.trim().chars().peekable();
    let mut in_quote = false;
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if in_quote {
            out.push(c);
            // A doubled quote closes and immediately reopens, which is fine
            if c == '\'' {
                in_quote = false;
            }
            continue;
        }

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }

        match c {
            '\'' => {
                in_quote = true;
                out.push(c);
            }
            '$' if chars.peek().is_some_and(char::is_ascii_digit) => {
                let mut digits = String::new();
                while let Some(d) = chars.next_if(char::is_ascii_digit) {
                    digits.push(d);
                }
                let arg = digits
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|idx| args.get(idx));
                match arg {
                    Some(value) => out.push_str(&value.to_literal()),
                    None => {
                        out.push('$');
                        out.push_str(&digits);
                    }
                }
            }
            c => out.push(c),
        }
    }

    out
}

/// Count distinct positional placeholders (the highest `$n`) in a template.
pub fn placeholder_count(template: &str) -> usize {
    let mut max = 0;
    let mut chars = template.chars().peekable();
    let mut in_quote = false;
    while let Some(c) = chars.next() {
        match c {
            '\'' => in_quote = !in_quote,
            '$' if !in_quote => {
                let mut digits = String::new();
                while let Some(d) = chars.next_if(char::is_ascii_digit) {
                    digits.push(d);
                }
                if let Ok(n) = digits.parse::<usize>() {
                    max = max.max(n);
                }
            }
            _ => {}
        }
    }
    max
}

/// `[<timestamp>] <statement>;`
pub fn format_line(timestamp: &NaiveDateTime, statement: &str) -> String {
    format!("[{}] {};", timestamp.format(TIMESTAMP_FORMAT), statement)
}

pub fn console_line(statement: &str) -> String {
    format!("{} {};", CONSOLE_PREFIX, statement)
}

fn parse_line(line: &str) -> AuditEntry {
    let parsed = line
        .strip_prefix('[')
        .and_then(|rest| rest.split_once("] "))
        .filter(|(ts, _)| NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_ok());

    match parsed {
        Some((timestamp, statement)) => AuditEntry {
            timestamp: timestamp.to_string(),
            statement: statement.strip_suffix(';').unwrap_or(statement).to_string(),
        },
        None => AuditEntry {
            timestamp: String::new(),
            statement: line.to_string(),
        },
    }
}
