mod execute;

use clap::Args;

/// Log a piece of evidence against a case
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  precinct insert-evidence --case-id 100 --tag EV-999 \\
      --description 'Silver Key' --location Archives --badge 9900")]
pub struct InsertEvidenceCmd {
    /// Case the evidence belongs to
    #[arg(long)]
    pub case_id: i64,

    /// Unique evidence tag
    #[arg(long)]
    pub tag: String,

    #[arg(long)]
    pub description: String,

    /// Where the evidence is stored
    #[arg(long)]
    pub location: String,

    /// Badge number of the logging detective
    #[arg(long)]
    pub badge: i64,
}

#[derive(Args, Debug)]
pub struct UpdateCaseStatusCmd {
    #[arg(long)]
    pub case_id: i64,

    /// New status, e.g. Open or Closed
    #[arg(long)]
    pub status: String,
}

#[derive(Args, Debug)]
pub struct DeleteResourceCmd {
    #[arg(long)]
    pub asset_tag: String,
}

/// Open a new case (status is set to Open)
#[derive(Args, Debug)]
pub struct CreateNewCaseCmd {
    #[arg(long)]
    pub case_id: i64,

    #[arg(long)]
    pub title: String,
}

#[derive(Args, Debug)]
pub struct AssignDetectiveCmd {
    #[arg(long)]
    pub badge: i64,

    #[arg(long)]
    pub case_id: i64,
}

#[derive(Args, Debug)]
pub struct AddPersonOfInterestCmd {
    #[arg(long)]
    pub person_id: i64,

    #[arg(long)]
    pub name: String,

    /// Category, e.g. Suspect or Witness
    #[arg(long = "type")]
    pub poi_type: String,
}

/// Record perpetrator details; the person of interest must already exist
#[derive(Args, Debug)]
pub struct AddPerpetratorDetailsCmd {
    #[arg(long)]
    pub perp_id: i64,

    #[arg(long)]
    pub person_id: i64,

    #[arg(long)]
    pub alias: String,
}

#[derive(Args, Debug)]
pub struct PromoteDetectiveCmd {
    #[arg(long)]
    pub badge: i64,

    #[arg(long)]
    pub rank: String,
}

#[derive(Args, Debug)]
pub struct TransferDetectiveCmd {
    #[arg(long)]
    pub badge: i64,

    #[arg(long)]
    pub squad_id: i64,
}

#[derive(Args, Debug)]
pub struct DeleteEvidenceCmd {
    #[arg(long)]
    pub tag: String,
}
