use serde::Serialize;

use super::QueryCmd;
use crate::commands::Execute;
use crate::session::{GraphSession, NormalizedResult, RawSession, SessionError};

/// Result of the query command execution
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutput {
    pub statement: String,
    #[serde(flatten)]
    pub result: NormalizedResult,
}

impl Execute for QueryCmd {
    type Output = QueryOutput;

    fn execute<S: RawSession + ?Sized>(
        self,
        session: &GraphSession<'_, S>,
    ) -> Result<Self::Output, SessionError> {
        let result = session.decode(&self.statement)?;
        Ok(QueryOutput {
            statement: self.statement,
            result,
        })
    }
}
