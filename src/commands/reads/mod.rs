mod execute;
mod execute_tests;

use clap::Args;

/// List detectives whose squad name contains a fragment
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  precinct squad-roster -s 99      # Squads with '99' in the name
  precinct squad-roster            # Every squad")]
pub struct SquadRosterCmd {
    /// Squad name fragment (substring match; empty matches all)
    #[arg(short, long, default_value = "")]
    pub squad: String,
}

#[derive(Args, Debug)]
pub struct CaseLoadCmd {}

#[derive(Args, Debug)]
pub struct HeistWinnersCmd {}

/// Search evidence descriptions for a keyword
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  precinct search-evidence -k Key    # Descriptions containing 'Key'")]
pub struct SearchEvidenceCmd {
    /// Keyword to look for in evidence descriptions
    #[arg(short, long)]
    pub keyword: String,
}

#[derive(Args, Debug)]
pub struct PerpetratorNetworkCmd {}

#[derive(Args, Debug)]
pub struct UnsolvedCasesCmd {}

#[derive(Args, Debug)]
pub struct ResourceCustodyCmd {}

#[derive(Args, Debug)]
pub struct BettingHistoryCmd {}

#[derive(Args, Debug)]
pub struct InterviewLogsCmd {}

#[derive(Args, Debug)]
pub struct DetectiveSpecializationsCmd {}
