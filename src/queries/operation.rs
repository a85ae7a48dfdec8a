//! A single value naming one catalog operation together with its arguments.
//!
//! Front ends build an `Operation` from user input and call `run`; the
//! outcome is rows for reads and an affected-row count for writes.

use crate::db::{DbError, Session};
use crate::types::{Outcome, UpdateOutcome};

use super::catalog::{self, StatementDescriptor};
use super::{reads, writes};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    SquadRoster { squad_filter: String },
    CaseLoad,
    HeistWinners,
    SearchEvidence { keyword: String },
    PerpetratorNetwork,
    UnsolvedCases,
    ResourceCustody,
    BettingHistory,
    InterviewLogs,
    DetectiveSpecializations,
    InsertEvidence {
        case_id: i64,
        tag: String,
        description: String,
        location: String,
        badge: i64,
    },
    UpdateCaseStatus { case_id: i64, status: String },
    DeleteResource { asset_tag: String },
    CreateNewCase { case_id: i64, title: String },
    AssignDetective { badge: i64, case_id: i64 },
    AddPersonOfInterest {
        person_id: i64,
        name: String,
        poi_type: String,
    },
    AddPerpetratorDetails {
        perp_id: i64,
        person_id: i64,
        alias: String,
    },
    PromoteDetective { badge: i64, new_rank: String },
    TransferDetective { badge: i64, squad_id: i64 },
    DeleteEvidence { tag: String },
}

impl Operation {
    /// The catalog entry this operation runs.
    pub fn descriptor(&self) -> &'static StatementDescriptor {
        match self {
            Operation::SquadRoster { .. } => &catalog::SQUAD_ROSTER,
            Operation::CaseLoad => &catalog::CASE_LOAD,
            Operation::HeistWinners => &catalog::HEIST_WINNERS,
            Operation::SearchEvidence { .. } => &catalog::SEARCH_EVIDENCE,
            Operation::PerpetratorNetwork => &catalog::PERPETRATOR_NETWORK,
            Operation::UnsolvedCases => &catalog::UNSOLVED_CASES,
            Operation::ResourceCustody => &catalog::RESOURCE_CUSTODY,
            Operation::BettingHistory => &catalog::BETTING_HISTORY,
            Operation::InterviewLogs => &catalog::INTERVIEW_LOGS,
            Operation::DetectiveSpecializations => &catalog::DETECTIVE_SPECIALIZATIONS,
            Operation::InsertEvidence { .. } => &catalog::INSERT_EVIDENCE,
            Operation::UpdateCaseStatus { .. } => &catalog::UPDATE_CASE_STATUS,
            Operation::DeleteResource { .. } => &catalog::DELETE_RESOURCE,
            Operation::CreateNewCase { .. } => &catalog::CREATE_NEW_CASE,
            Operation::AssignDetective { .. } => &catalog::ASSIGN_DETECTIVE,
            Operation::AddPersonOfInterest { .. } => &catalog::ADD_PERSON_OF_INTEREST,
            Operation::AddPerpetratorDetails { .. } => &catalog::ADD_PERPETRATOR_DETAILS,
            Operation::PromoteDetective { .. } => &catalog::PROMOTE_DETECTIVE,
            Operation::TransferDetective { .. } => &catalog::TRANSFER_DETECTIVE,
            Operation::DeleteEvidence { .. } => &catalog::DELETE_EVIDENCE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn run(&self, session: &mut Session) -> Result<Outcome, DbError> {
        let rows = match self {
            Operation::SquadRoster { squad_filter } => reads::squad_roster(session, squad_filter)?,
            Operation::CaseLoad => reads::case_load(session)?,
            Operation::HeistWinners => reads::heist_winners(session)?,
            Operation::SearchEvidence { keyword } => reads::search_evidence(session, keyword)?,
            Operation::PerpetratorNetwork => reads::perpetrator_network(session)?,
            Operation::UnsolvedCases => reads::unsolved_cases(session)?,
            Operation::ResourceCustody => reads::resource_custody(session)?,
            Operation::BettingHistory => reads::betting_history(session)?,
            Operation::InterviewLogs => reads::interview_logs(session)?,
            Operation::DetectiveSpecializations => reads::detective_specializations(session)?,
            write => {
                let affected_rows = write.run_write(session)?;
                return Ok(Outcome::Affected(UpdateOutcome {
                    operation: write.name().to_string(),
                    affected_rows,
                }));
            }
        };
        Ok(Outcome::Rows(rows))
    }

    fn run_write(&self, session: &mut Session) -> Result<u64, DbError> {
        match self {
            Operation::InsertEvidence {
                case_id,
                tag,
                description,
                location,
                badge,
            } => writes::insert_evidence(session, *case_id, tag, description, location, *badge),
            Operation::UpdateCaseStatus { case_id, status } => {
                writes::update_case_status(session, *case_id, status)
            }
            Operation::DeleteResource { asset_tag } => writes::delete_resource(session, asset_tag),
            Operation::CreateNewCase { case_id, title } => writes::create_new_case(session, *case_id, title),
            Operation::AssignDetective { badge, case_id } => {
                writes::assign_detective(session, *badge, *case_id)
            }
            Operation::AddPersonOfInterest {
                person_id,
                name,
                poi_type,
            } => writes::add_person_of_interest(session, *person_id, name, poi_type),
            Operation::AddPerpetratorDetails {
                perp_id,
                person_id,
                alias,
            } => writes::add_perpetrator_details(session, *perp_id, *person_id, alias),
            Operation::PromoteDetective { badge, new_rank } => {
                writes::promote_detective(session, *badge, new_rank)
            }
            Operation::TransferDetective { badge, squad_id } => {
                writes::transfer_detective(session, *badge, *squad_id)
            }
            Operation::DeleteEvidence { tag } => writes::delete_evidence(session, tag),
            read => Err(DbError::WrongKind {
                name: read.name().to_string(),
                kind: read.descriptor().kind.as_str(),
                requested: catalog::StatementKind::Write.as_str(),
            }),
        }
    }
}
