//! Command definitions and implementations.
//!
//! Each group of commands lives in its own module with:
//! - The command structs with clap attributes for CLI parsing
//! - `execute.rs` mapping the command onto the session
//! - `cli_tests.rs` / `execute_tests.rs` for parsing and behaviour

mod activity;
mod connect;
mod inspect;
mod reads;
mod writes;

pub use activity::{ActivityCmd, ActivityResult};
pub use connect::{ConnectCmd, ConnectionStatus};
pub use inspect::{DescribeCmd, InspectCmd, TablesCmd};
pub use reads::{
    BettingHistoryCmd, CaseLoadCmd, DetectiveSpecializationsCmd, HeistWinnersCmd, InterviewLogsCmd,
    PerpetratorNetworkCmd, ResourceCustodyCmd, SearchEvidenceCmd, SquadRosterCmd, UnsolvedCasesCmd,
};
pub use writes::{
    AddPerpetratorDetailsCmd, AddPersonOfInterestCmd, AssignDetectiveCmd, CreateNewCaseCmd,
    DeleteEvidenceCmd, DeleteResourceCmd, InsertEvidenceCmd, PromoteDetectiveCmd,
    TransferDetectiveCmd, UpdateCaseStatusCmd,
};

use clap::Subcommand;
use std::error::Error;

use crate::db::Session;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a connection and report where it went
    Connect(ConnectCmd),

    /// List detectives whose squad name contains a fragment
    SquadRoster(SquadRosterCmd),

    /// Count assigned cases per detective, busiest first
    CaseLoad(CaseLoadCmd),

    /// Show Halloween heist winners, most recent first
    HeistWinners(HeistWinnersCmd),

    /// Search evidence descriptions for a keyword
    SearchEvidence(SearchEvidenceCmd),

    /// Show perpetrators with their real names and known associates
    PerpetratorNetwork(PerpetratorNetworkCmd),

    /// List cases that are not closed
    UnsolvedCases(UnsolvedCasesCmd),

    /// Show who holds each precinct resource
    ResourceCustody(ResourceCustodyCmd),

    /// Show the betting ledger between detectives
    BettingHistory(BettingHistoryCmd),

    /// Show interview records
    InterviewLogs(InterviewLogsCmd),

    /// List detective specializations
    DetectiveSpecializations(DetectiveSpecializationsCmd),

    /// Log a piece of evidence against a case
    InsertEvidence(InsertEvidenceCmd),

    /// Set the status of a case
    UpdateCaseStatus(UpdateCaseStatusCmd),

    /// Remove a precinct resource by asset tag
    DeleteResource(DeleteResourceCmd),

    /// Open a new case
    CreateNewCase(CreateNewCaseCmd),

    /// Assign a detective to a case
    AssignDetective(AssignDetectiveCmd),

    /// Add a person of interest
    AddPersonOfInterest(AddPersonOfInterestCmd),

    /// Record perpetrator details for an existing person of interest
    AddPerpetratorDetails(AddPerpetratorDetailsCmd),

    /// Change a detective's rank
    PromoteDetective(PromoteDetectiveCmd),

    /// Move a detective to another squad
    TransferDetective(TransferDetectiveCmd),

    /// Remove an evidence entry by tag
    DeleteEvidence(DeleteEvidenceCmd),

    /// List the tables in the database
    Tables(TablesCmd),

    /// Show the columns of a table
    Describe(DescribeCmd),

    /// Dump every row of a table
    Inspect(InspectCmd),

    /// Show the most recent audit log entries
    Activity(ActivityCmd),
}

fn render<C: Execute>(cmd: C, session: &mut Session, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let result = cmd.execute(session)?;
    Ok(result.format(format))
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, session: &mut Session, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Connect(cmd) => render(cmd, session, format),
            Command::SquadRoster(cmd) => render(cmd, session, format),
            Command::CaseLoad(cmd) => render(cmd, session, format),
            Command::HeistWinners(cmd) => render(cmd, session, format),
            Command::SearchEvidence(cmd) => render(cmd, session, format),
            Command::PerpetratorNetwork(cmd) => render(cmd, session, format),
            Command::UnsolvedCases(cmd) => render(cmd, session, format),
            Command::ResourceCustody(cmd) => render(cmd, session, format),
            Command::BettingHistory(cmd) => render(cmd, session, format),
            Command::InterviewLogs(cmd) => render(cmd, session, format),
            Command::DetectiveSpecializations(cmd) => render(cmd, session, format),
            Command::InsertEvidence(cmd) => render(cmd, session, format),
            Command::UpdateCaseStatus(cmd) => render(cmd, session, format),
            Command::DeleteResource(cmd) => render(cmd, session, format),
            Command::CreateNewCase(cmd) => render(cmd, session, format),
            Command::AssignDetective(cmd) => render(cmd, session, format),
            Command::AddPersonOfInterest(cmd) => render(cmd, session, format),
            Command::AddPerpetratorDetails(cmd) => render(cmd, session, format),
            Command::PromoteDetective(cmd) => render(cmd, session, format),
            Command::TransferDetective(cmd) => render(cmd, session, format),
            Command::DeleteEvidence(cmd) => render(cmd, session, format),
            Command::Tables(cmd) => render(cmd, session, format),
            Command::Describe(cmd) => render(cmd, session, format),
            Command::Inspect(cmd) => render(cmd, session, format),
            Command::Activity(cmd) => render(cmd, session, format),
        }
    }
}
