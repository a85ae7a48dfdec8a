//! Shared result types handed back to front-ends.

mod outcome;
mod table;

pub use outcome::{Outcome, UpdateOutcome};
pub use table::{Record, TabularResult};
