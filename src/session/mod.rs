//! Session-level statement execution and result normalization.
//!
//! This module sits between an application and a graph engine session:
//! - `StatementExecutor` runs mutations and classifies failures, singling
//!   out data-version conflicts so callers can retry optimistic writes
//! - `ResultDecoder` runs reads and turns the engine's tagged values into
//!   a `NormalizedResult` of ordered rows
//! - `GraphSession` bundles both over one borrowed session
//!
//! # Session ownership
//!
//! Sessions are borrowed, never owned. A session is a stateful, single-use
//! network resource: one statement in flight at a time, no internal locking,
//! no retries, no timeouts. All of that belongs to the caller or the pool
//! that handed the session out.

mod conflict;
mod decoder;
mod error;
mod executor;
mod outcome;
mod result;
mod value;

pub use conflict::{ConflictMatcher, DATA_CONFLICT_MARKER};
pub use decoder::{decode_outcome, ResultDecoder};
pub use error::{SessionError, TransportError};
pub use executor::StatementExecutor;
pub use outcome::{ErrorCode, RawOutcome, RawRow};
pub use result::{ColumnPool, NormalizedResult, NormalizedRow, SharedStr};
pub use value::{FieldValue, GraphKind, GraphValue, RawValue};

/// An established session against the graph engine.
///
/// Implementations own transport, authentication and connection setup.
pub trait RawSession {
    /// Execute one statement and return the fully buffered outcome.
    ///
    /// `Err` means the call itself failed; an engine-side rejection is an
    /// `Ok` outcome with a non-success code.
    fn raw_execute(&self, statement: &str) -> Result<RawOutcome, TransportError>;

    /// Hand the session back to its owner.
    fn release(&self);

    /// Liveness check.
    fn ping(&self) -> bool;
}

/// Executor and decoder sharing one borrowed session.
pub struct GraphSession<'s, S: RawSession + ?Sized> {
    session: &'s S,
    executor: StatementExecutor<'s, S>,
    decoder: ResultDecoder<'s, S>,
}

impl<'s, S: RawSession + ?Sized> GraphSession<'s, S> {
    pub fn new(session: &'s S) -> Self {
        Self::with_conflict_matcher(session, ConflictMatcher::default())
    }

    pub fn with_conflict_matcher(session: &'s S, conflicts: ConflictMatcher) -> Self {
        Self {
            session,
            executor: StatementExecutor::with_conflict_matcher(session, conflicts),
            decoder: ResultDecoder::new(session),
        }
    }

    /// See [`StatementExecutor::execute`].
    pub fn execute(&self, statement: &str) -> Result<ErrorCode, SessionError> {
        self.executor.execute(statement)
    }

    /// See [`ResultDecoder::query`].
    pub fn query(&self, statement: &str) -> Result<RawOutcome, SessionError> {
        self.decoder.query(statement)
    }

    /// See [`ResultDecoder::decode`].
    pub fn decode(&self, statement: &str) -> Result<NormalizedResult, SessionError> {
        self.decoder.decode(statement)
    }

    /// Release the underlying session. Call at most once; what happens on
    /// a second call is up to the session.
    pub fn release(&self) {
        tracing::debug!("releasing session");
        self.session.release();
    }

    pub fn ping(&self) -> bool {
        self.session.ping()
    }
}
