//! Statement catalog and inspection surface.
//!
//! - `catalog`: the twenty fixed statements and their descriptors
//! - `reads` / `writes`: one typed function per catalog entry
//! - `operation`: the `Operation` enum front ends dispatch through
//! - `inspect`: list, describe and dump tables the server reports

pub mod catalog;
pub mod inspect;
pub mod operation;
pub mod reads;
pub mod writes;

pub use catalog::{lookup, BoundStatement, StatementDescriptor, StatementKind, CATALOG};
pub use inspect::{describe_table, list_tables, resolve_table, select_all, TableName};
pub use operation::Operation;
