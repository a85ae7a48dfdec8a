use std::error::Error;

use super::{
    AddPerpetratorDetailsCmd, AddPersonOfInterestCmd, AssignDetectiveCmd, CreateNewCaseCmd,
    DeleteEvidenceCmd, DeleteResourceCmd, InsertEvidenceCmd, PromoteDetectiveCmd,
    TransferDetectiveCmd, UpdateCaseStatusCmd,
};
use crate::commands::Execute;
use crate::db::Session;
use crate::queries::Operation;
use crate::types::{Outcome, UpdateOutcome};

/// Run a write operation and keep its affected-row count.
fn run_write(session: &mut Session, operation: Operation) -> Result<UpdateOutcome, Box<dyn Error>> {
    match operation.run(session)? {
        Outcome::Affected(outcome) => Ok(outcome),
        Outcome::Rows(_) => Err(format!("'{}' is not a write operation", operation.name()).into()),
    }
}

impl Execute for InsertEvidenceCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::InsertEvidence {
                case_id: self.case_id,
                tag: self.tag,
                description: self.description,
                location: self.location,
                badge: self.badge,
            },
        )
    }
}

impl Execute for UpdateCaseStatusCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::UpdateCaseStatus {
                case_id: self.case_id,
                status: self.status,
            },
        )
    }
}

impl Execute for DeleteResourceCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(session, Operation::DeleteResource { asset_tag: self.asset_tag })
    }
}

impl Execute for CreateNewCaseCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::CreateNewCase {
                case_id: self.case_id,
                title: self.title,
            },
        )
    }
}

impl Execute for AssignDetectiveCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::AssignDetective {
                badge: self.badge,
                case_id: self.case_id,
            },
        )
    }
}

impl Execute for AddPersonOfInterestCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::AddPersonOfInterest {
                person_id: self.person_id,
                name: self.name,
                poi_type: self.poi_type,
            },
        )
    }
}

impl Execute for AddPerpetratorDetailsCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::AddPerpetratorDetails {
                perp_id: self.perp_id,
                person_id: self.person_id,
                alias: self.alias,
            },
        )
    }
}

impl Execute for PromoteDetectiveCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::PromoteDetective {
                badge: self.badge,
                new_rank: self.rank,
            },
        )
    }
}

impl Execute for TransferDetectiveCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(
            session,
            Operation::TransferDetective {
                badge: self.badge,
                squad_id: self.squad_id,
            },
        )
    }
}

impl Execute for DeleteEvidenceCmd {
    type Output = UpdateOutcome;

    fn execute(self, session: &mut Session) -> Result<Self::Output, Box<dyn Error>> {
        run_write(session, Operation::DeleteEvidence { tag: self.tag })
    }
}
