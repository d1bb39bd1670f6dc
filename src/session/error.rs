//! Classified session errors and the transport failure they may wrap.

use thiserror::Error;

use super::outcome::ErrorCode;

/// Failure of the underlying session's execution primitive itself
/// (connection dropped, protocol error, session no longer usable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport failure ({code}): {message}")]
pub struct TransportError {
    pub code: i32,
    pub message: String,
}

impl TransportError {
    /// A transport failure reported as `E_RPC_FAILURE`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::RpcFailure, message)
    }

    pub fn with_code(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into().value(),
            message: message.into(),
        }
    }
}

/// A non-successful statement, classified so callers can pick a policy
/// without matching on engine message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The execution primitive failed before an outcome was produced.
    #[error("RPC call failed ({code}): {message}")]
    RpcFailure { code: i32, message: String },

    /// The engine rejected the statement.
    #[error("Statement failed ({code}): {message}")]
    ExecutionError { code: i32, message: String },

    /// Optimistic concurrency check failed; the write can be retried.
    #[error("Data version conflict ({code}): {message}")]
    VersionConflict { code: i32, message: String },

    /// Any failure while reading. `code` is always `E_QUERY_FAILED`;
    /// `status` keeps the engine or transport code that caused it.
    #[error("Query failed (status {status}): {message}")]
    QueryFailure {
        code: i32,
        status: i32,
        message: String,
    },
}

impl SessionError {
    pub(crate) fn rpc_failure(err: TransportError) -> Self {
        Self::RpcFailure {
            code: err.code,
            message: err.message,
        }
    }

    pub(crate) fn query_failure(status: i32, message: impl Into<String>) -> Self {
        Self::QueryFailure {
            code: ErrorCode::QueryFailed.value(),
            status,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::RpcFailure { code, .. }
            | Self::ExecutionError { code, .. }
            | Self::VersionConflict { code, .. }
            | Self::QueryFailure { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RpcFailure { message, .. }
            | Self::ExecutionError { message, .. }
            | Self::VersionConflict { message, .. }
            | Self::QueryFailure { message, .. } => message,
        }
    }

    pub fn is_version_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }

    /// Whether retrying the same logical operation can succeed: transport
    /// faults (after backoff) and version conflicts (after re-reading).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RpcFailure { .. } | Self::VersionConflict { .. })
    }
}
