mod execute;
mod execute_tests;
mod output;

pub use execute::MutationResult;

use clap::Args;

/// Run a mutation statement and report its status
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  graph_session execute \":create person {name: String => age: Int}\"
  graph_session execute \"?[name, age] <- [['alice', 30]] :put person {name => age}\"

A data-version conflict is reported as its own error so scripts can retry.")]
pub struct MutationCmd {
    /// Statement to execute
    pub statement: String,
}
