//! Raw engine responses and the status code space they are reported in.

use std::fmt;

use super::value::RawValue;

/// Status codes reported by the graph engine.
///
/// Codes the engine may return but that this crate has no reason to name
/// are kept as `Other` so conversion from `i32` never loses information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Succeeded,
    Disconnected,
    FailToConnect,
    RpcFailure,
    BadUsernamePassword,
    SessionInvalid,
    SessionTimeout,
    SyntaxError,
    ExecutionError,
    StatementEmpty,
    BadPermission,
    SemanticError,
    PartialSucceeded,
    /// Generic read failure raised by this crate, never by the engine.
    QueryFailed,
    Other(i32),
}

impl ErrorCode {
    /// Numeric value as sent on the wire.
    pub fn value(self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::Disconnected => -1,
            Self::FailToConnect => -2,
            Self::RpcFailure => -3,
            Self::BadUsernamePassword => -1001,
            Self::SessionInvalid => -1002,
            Self::SessionTimeout => -1003,
            Self::SyntaxError => -1004,
            Self::ExecutionError => -1005,
            Self::StatementEmpty => -1006,
            Self::BadPermission => -1008,
            Self::SemanticError => -1009,
            Self::PartialSucceeded => -1011,
            Self::QueryFailed => -9001,
            Self::Other(code) => code,
        }
    }

    pub fn from_value(code: i32) -> Self {
        match code {
            0 => Self::Succeeded,
            -1 => Self::Disconnected,
            -2 => Self::FailToConnect,
            -3 => Self::RpcFailure,
            -1001 => Self::BadUsernamePassword,
            -1002 => Self::SessionInvalid,
            -1003 => Self::SessionTimeout,
            -1004 => Self::SyntaxError,
            -1005 => Self::ExecutionError,
            -1006 => Self::StatementEmpty,
            -1008 => Self::BadPermission,
            -1009 => Self::SemanticError,
            -1011 => Self::PartialSucceeded,
            -9001 => Self::QueryFailed,
            other => Self::Other(other),
        }
    }

    /// Symbolic name, e.g. `E_EXECUTION_ERROR`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Succeeded => "SUCCEEDED",
            Self::Disconnected => "E_DISCONNECTED",
            Self::FailToConnect => "E_FAIL_TO_CONNECT",
            Self::RpcFailure => "E_RPC_FAILURE",
            Self::BadUsernamePassword => "E_BAD_USERNAME_PASSWORD",
            Self::SessionInvalid => "E_SESSION_INVALID",
            Self::SessionTimeout => "E_SESSION_TIMEOUT",
            Self::SyntaxError => "E_SYNTAX_ERROR",
            Self::ExecutionError => "E_EXECUTION_ERROR",
            Self::StatementEmpty => "E_STATEMENT_EMPTY",
            Self::BadPermission => "E_BAD_PERMISSION",
            Self::SemanticError => "E_SEMANTIC_ERROR",
            Self::PartialSucceeded => "E_PARTIAL_SUCCEEDED",
            Self::QueryFailed => "E_QUERY_FAILED",
            Self::Other(_) => "E_UNKNOWN",
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self::from_value(code)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.value()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "E_UNKNOWN({})", code),
            known => f.write_str(known.name()),
        }
    }
}

/// One positional row as returned by the engine.
pub type RawRow = Vec<RawValue>;

/// The engine's direct response to a statement, fully buffered.
///
/// On success `columns` and `rows` are either both absent (pure mutation)
/// or both present with every row as long as the column list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawOutcome {
    pub code: i32,
    pub message: Option<String>,
    pub columns: Option<Vec<String>>,
    pub rows: Option<Vec<RawRow>>,
}

impl RawOutcome {
    /// A successful outcome without a result set.
    pub fn succeeded() -> Self {
        Self::default()
    }

    /// A successful outcome carrying a column/row grid.
    pub fn with_grid(columns: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self {
            code: ErrorCode::Succeeded.value(),
            message: None,
            columns: Some(columns),
            rows: Some(rows),
        }
    }

    /// A failed outcome with the given status and message.
    pub fn failed(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into().value(),
            message: Some(message.into()),
            columns: None,
            rows: None,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from_value(self.code)
    }

    pub fn is_success(&self) -> bool {
        self.error_code().is_success()
    }

    /// The engine's message, or an empty string when none was sent.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn columns(&self) -> &[String] {
        self.columns.as_deref().unwrap_or(&[])
    }

    pub fn rows(&self) -> &[RawRow] {
        self.rows.as_deref().unwrap_or(&[])
    }
}
