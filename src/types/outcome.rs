//! Outcomes of catalog operations.

use serde::Serialize;

use super::TabularResult;

/// Result of a write statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub operation: String,
    pub affected_rows: u64,
}

impl UpdateOutcome {
    pub fn message(&self) -> String {
        format!("Success: {} row(s) affected.", self.affected_rows)
    }
}

/// What running a catalog operation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Rows(TabularResult),
    Affected(UpdateOutcome),
}
