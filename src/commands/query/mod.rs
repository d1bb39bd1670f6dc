mod execute;
mod output;

pub use execute::QueryOutput;

use clap::Args;

/// Run a read statement and print the normalized rows
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  graph_session query \"?[name, age] := *person{name, age}\"
  graph_session query \"?[x] := x = 1\" --format json")]
pub struct QueryCmd {
    /// Statement to run
    pub statement: String,
}
