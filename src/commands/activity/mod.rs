mod execute;
mod output;

use clap::Args;

pub use execute::ActivityResult;

/// Show the most recent audit log entries
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  precinct activity                # Last 20 statements, oldest first
  precinct activity -l 100         # Last 100 statements")]
pub struct ActivityCmd {
    /// Number of entries to show (1-1000)
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}
