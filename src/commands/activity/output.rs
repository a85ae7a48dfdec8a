//! Output formatting for the activity command.

use super::ActivityResult;
use crate::output::Outputable;

impl Outputable for ActivityResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Recent activity ({}):", self.log_path), String::new()];

        if self.entries.is_empty() {
            lines.push("No activity recorded.".to_string());
            return lines.join("\n");
        }

        for entry in &self.entries {
            if entry.timestamp.is_empty() {
                lines.push(entry.statement.clone());
            } else {
                lines.push(format!("[{}] {};", entry.timestamp, entry.statement));
            }
        }
        lines.join("\n")
    }
}
