//! Mutation-style execution: did the statement happen or not.

use super::conflict::ConflictMatcher;
use super::error::SessionError;
use super::outcome::ErrorCode;
use super::RawSession;

/// Runs statements whose only interesting output is success or failure.
pub struct StatementExecutor<'s, S: RawSession + ?Sized> {
    session: &'s S,
    conflicts: ConflictMatcher,
}

impl<'s, S: RawSession + ?Sized> StatementExecutor<'s, S> {
    pub fn new(session: &'s S) -> Self {
        Self::with_conflict_matcher(session, ConflictMatcher::default())
    }

    pub fn with_conflict_matcher(session: &'s S, conflicts: ConflictMatcher) -> Self {
        Self { session, conflicts }
    }

    pub fn conflict_matcher(&self) -> &ConflictMatcher {
        &self.conflicts
    }

    /// Execute `statement` and classify the outcome.
    ///
    /// Returns `ErrorCode::Succeeded` on success. Version conflicts are
    /// raised without an error-level log: they are expected under
    /// concurrent writes and the caller decides whether to retry.
    pub fn execute(&self, statement: &str) -> Result<ErrorCode, SessionError> {
        tracing::debug!(statement, "executing statement");

        let outcome = self.session.raw_execute(statement).map_err(|err| {
            tracing::error!(
                code = err.code,
                error = %err.message,
                statement,
                "RPC call failed while executing statement"
            );
            SessionError::rpc_failure(err)
        })?;

        if outcome.is_success() {
            return Ok(ErrorCode::Succeeded);
        }

        if self.conflicts.is_version_conflict(&outcome) {
            return Err(SessionError::VersionConflict {
                code: outcome.code,
                message: outcome.message().to_string(),
            });
        }

        tracing::error!(
            code = outcome.code,
            error = outcome.message(),
            statement,
            "statement execution failed"
        );
        Err(SessionError::ExecutionError {
            code: outcome.code,
            message: outcome.message().to_string(),
        })
    }
}
