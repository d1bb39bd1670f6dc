use clap::Args;
use serde::Serialize;

use crate::commands::Execute;
use crate::output::Outputable;
use crate::session::{GraphSession, RawSession, SessionError};

/// Check whether the session is alive
#[derive(Args, Debug)]
pub struct PingCmd {}

/// Result of the ping command
#[derive(Debug, Clone, Serialize)]
pub struct PingResult {
    pub alive: bool,
}

impl Execute for PingCmd {
    type Output = PingResult;

    fn execute<S: RawSession + ?Sized>(
        self,
        session: &GraphSession<'_, S>,
    ) -> Result<Self::Output, SessionError> {
        Ok(PingResult {
            alive: session.ping(),
        })
    }
}

impl Outputable for PingResult {
    fn to_table(&self) -> String {
        if self.alive {
            "Session is alive.".to_string()
        } else {
            "Session is not responding.".to_string()
        }
    }
}
