mod execute;

use clap::Args;

#[derive(Args, Debug)]
pub struct TablesCmd {}

/// Show the columns of a table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  precinct describe detective      # Columns of the Detective table")]
pub struct DescribeCmd {
    /// Table name, as listed by `precinct tables` (case-insensitive)
    pub table: String,
}

/// Dump every row of a table
#[derive(Args, Debug)]
pub struct InspectCmd {
    /// Table name, as listed by `precinct tables` (case-insensitive)
    pub table: String,
}
