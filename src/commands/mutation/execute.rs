use serde::Serialize;

use super::MutationCmd;
use crate::commands::Execute;
use crate::session::{ErrorCode, GraphSession, RawSession, SessionError};

/// Result of a successful mutation
#[derive(Debug, Clone, Serialize)]
pub struct MutationResult {
    pub statement: String,
    pub code: i32,
    pub status: String,
}

impl MutationResult {
    pub fn new(statement: String, code: ErrorCode) -> Self {
        Self {
            statement,
            code: code.value(),
            status: code.name().to_string(),
        }
    }
}

impl Execute for MutationCmd {
    type Output = MutationResult;

    fn execute<S: RawSession + ?Sized>(
        self,
        session: &GraphSession<'_, S>,
    ) -> Result<Self::Output, SessionError> {
        let code = session.execute(&self.statement)?;
        Ok(MutationResult::new(self.statement, code))
    }
}
