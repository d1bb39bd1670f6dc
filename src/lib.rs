//! graph_session library - session-level execution for a graph engine
//!
//! Provides statement execution with failure classification, result
//! normalization, an embedded engine session, and the command and output
//! infrastructure behind the `graph_session` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;
pub mod session;

pub use session::{
    ErrorCode, FieldValue, GraphSession, NormalizedResult, NormalizedRow, RawOutcome, RawSession,
    RawValue, ResultDecoder, SessionError, StatementExecutor, TransportError,
};

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
