//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

use crate::types::{Outcome, TabularResult, UpdateOutcome};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the requested output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

pub const EMPTY_ROWS_MESSAGE: &str = "No rows.";

/// Render rows as left-aligned columns under a dashed header rule.
///
/// Column widths are measured in characters. An empty result still prints
/// its header when the server reported columns.
pub fn render_table(columns: &[String], rows: &[Vec<String>]) -> String {
    if columns.is_empty() {
        return EMPTY_ROWS_MESSAGE.to_string();
    }

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(render_row(columns));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    if rows.is_empty() {
        lines.push(EMPTY_ROWS_MESSAGE.to_string());
        return lines.join("\n");
    }

    for row in rows {
        lines.push(render_row(row));
    }
    lines.push(String::new());
    lines.push(format!(
        "({} row{})",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));
    lines.join("\n")
}

impl Outputable for TabularResult {
    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows()
            .iter()
            .map(|record| record.values().map(|v| v.to_string()).collect())
            .collect();
        render_table(self.columns(), &rows)
    }
}

impl Outputable for UpdateOutcome {
    fn to_table(&self) -> String {
        self.message()
    }
}

impl Outputable for Outcome {
    fn to_table(&self) -> String {
        match self {
            Outcome::Rows(table) => table.to_table(),
            Outcome::Affected(update) => update.to_table(),
        }
    }
}
