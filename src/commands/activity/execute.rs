use std::error::Error;

use serde::Serialize;

use super::ActivityCmd;
use crate::audit::AuditEntry;
use crate::commands::Execute;
use crate::db::Session;

/// Tail of the audit log, oldest entry first.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResult {
    pub log_path: String,
    pub entries: Vec<AuditEntry>,
}

impl Execute for ActivityCmd {
    type Output = ActivityResult;

    /// Reads the audit file only; no connection is opened.
    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        let log = session.audit_log();
        let entries = log.recent(self.limit as usize)?;
        Ok(ActivityResult {
            log_path: log.path().display().to_string(),
            entries,
        })
    }
}
