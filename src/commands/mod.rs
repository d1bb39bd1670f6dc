//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs`: the result type and the `Execute` impl
//! - `output.rs`: table formatting for the result

mod mutation;
mod ping;
mod query;

pub use mutation::{MutationCmd, MutationResult};
pub use ping::{PingCmd, PingResult};
pub use query::{QueryCmd, QueryOutput};

use clap::Subcommand;
use std::error::Error;

use crate::output::{OutputFormat, Outputable};
use crate::session::{GraphSession, RawSession, SessionError};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute<S: RawSession + ?Sized>(
        self,
        session: &GraphSession<'_, S>,
    ) -> Result<Self::Output, SessionError>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a mutation statement and report its status
    Execute(MutationCmd),

    /// Run a read statement and print the normalized rows
    Query(QueryCmd),

    /// Check whether the session is alive
    Ping(PingCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run<S: RawSession + ?Sized>(
        self,
        session: &GraphSession<'_, S>,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Execute(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
            Command::Query(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
            Command::Ping(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => Err(format!(
                "Unknown command: {}",
                args.first().map(String::as_str).unwrap_or("")
            )
            .into()),
        }
    }
}
