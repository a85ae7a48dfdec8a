//! precinct_db library - Precinct case database access layer
//!
//! Provides the connection session, SQL audit log, fixed statement catalog
//! and output formatting behind the `precinct` command-line tool.

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
pub mod queries;
pub mod types;

#[cfg(test)]
#[macro_use]
mod test_macros;

#[cfg(test)]
pub mod test_utils;
