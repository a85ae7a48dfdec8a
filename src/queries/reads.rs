//! Read operations over the precinct schema.
//!
//! Each function binds its arguments against the matching catalog entry and
//! returns the projected rows. Substring filters are wrapped in `%` on both
//! sides; an empty filter matches every row.

use crate::db::{DbError, Session};
use crate::types::TabularResult;

use super::catalog::{self, contains_pattern};

/// Detectives whose squad name contains `squad_filter`.
pub fn squad_roster(session: &mut Session, squad_filter: &str) -> Result<TabularResult, DbError> {
    catalog::SQUAD_ROSTER
        .bind(vec![contains_pattern(squad_filter).into()])?
        .query(session)
}

/// Assigned case count per detective, busiest first. Detectives with no
/// assignments appear with 0.
pub fn case_load(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::CASE_LOAD.bind(vec![])?.query(session)
}

/// Halloween heists, most recent year first. `winner` is null when the
/// winner is not a known detective.
pub fn heist_winners(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::HEIST_WINNERS.bind(vec![])?.query(session)
}

pub fn search_evidence(session: &mut Session, keyword: &str) -> Result<TabularResult, DbError> {
    catalog::SEARCH_EVIDENCE
        .bind(vec![contains_pattern(keyword).into()])?
        .query(session)
}

/// Perpetrators with their real names and known associates, one row per
/// associate.
pub fn perpetrator_network(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::PERPETRATOR_NETWORK.bind(vec![])?.query(session)
}

/// Cases whose status is anything other than `Closed`, including unset.
pub fn unsolved_cases(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::UNSOLVED_CASES.bind(vec![])?.query(session)
}

pub fn resource_custody(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::RESOURCE_CUSTODY.bind(vec![])?.query(session)
}

pub fn betting_history(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::BETTING_HISTORY.bind(vec![])?.query(session)
}

pub fn interview_logs(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::INTERVIEW_LOGS.bind(vec![])?.query(session)
}

pub fn detective_specializations(session: &mut Session) -> Result<TabularResult, DbError> {
    catalog::DETECTIVE_SPECIALIZATIONS.bind(vec![])?.query(session)
}
