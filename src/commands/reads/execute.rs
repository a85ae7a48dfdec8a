use std::error::Error;

use super::{
    BettingHistoryCmd, CaseLoadCmd, DetectiveSpecializationsCmd, HeistWinnersCmd, InterviewLogsCmd,
    PerpetratorNetworkCmd, ResourceCustodyCmd, SearchEvidenceCmd, SquadRosterCmd, UnsolvedCasesCmd,
};
use crate::commands::Execute;
use crate::db::Session;
use crate::queries::reads;
use crate::types::TabularResult;

impl Execute for SquadRosterCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::squad_roster(session, &self.squad)?)
    }
}

impl Execute for CaseLoadCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::case_load(session)?)
    }
}

impl Execute for HeistWinnersCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::heist_winners(session)?)
    }
}

impl Execute for SearchEvidenceCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::search_evidence(session, &self.keyword)?)
    }
}

impl Execute for PerpetratorNetworkCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::perpetrator_network(session)?)
    }
}

impl Execute for UnsolvedCasesCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::unsolved_cases(session)?)
    }
}

impl Execute for ResourceCustodyCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::resource_custody(session)?)
    }
}

impl Execute for BettingHistoryCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::betting_history(session)?)
    }
}

impl Execute for InterviewLogsCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::interview_logs(session)?)
    }
}

impl Execute for DetectiveSpecializationsCmd {
    type Output = TabularResult;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        Ok(reads::detective_specializations(session)?)
    }
}
