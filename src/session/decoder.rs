//! Query-style execution: validate the outcome and normalize its grid.

use std::rc::Rc;

use super::error::SessionError;
use super::outcome::{RawOutcome, RawRow};
use super::result::{ColumnPool, NormalizedResult, NormalizedRow};
use super::value::FieldValue;
use super::RawSession;

/// Runs read statements and turns their raw grids into normalized results.
pub struct ResultDecoder<'s, S: RawSession + ?Sized> {
    session: &'s S,
}

impl<'s, S: RawSession + ?Sized> ResultDecoder<'s, S> {
    pub fn new(session: &'s S) -> Self {
        Self { session }
    }

    /// Execute `statement` and return the raw outcome if it succeeded.
    ///
    /// Every failure, transport or status, is reported as
    /// `SessionError::QueryFailure`; reads get no conflict classification.
    pub fn query(&self, statement: &str) -> Result<RawOutcome, SessionError> {
        tracing::debug!(statement, "executing query");

        let outcome = self.session.raw_execute(statement).map_err(|err| {
            tracing::error!(
                code = err.code,
                error = %err.message,
                statement,
                "RPC call failed while querying"
            );
            SessionError::query_failure(err.code, err.message)
        })?;

        if !outcome.is_success() {
            tracing::error!(
                code = outcome.code,
                error = outcome.message(),
                statement,
                "query failed"
            );
            return Err(SessionError::query_failure(outcome.code, outcome.message()));
        }

        Ok(outcome)
    }

    /// Execute `statement` and decode every row eagerly.
    pub fn decode(&self, statement: &str) -> Result<NormalizedResult, SessionError> {
        let outcome = self.query(statement)?;
        Ok(decode_outcome(&outcome))
    }
}

/// Normalize the grid of an outcome. The status code is not inspected.
///
/// No columns gives an empty result whatever the rows say; columns without
/// rows give a result with the columns declared and zero rows. Column names
/// are interned once and shared by all rows.
pub fn decode_outcome(outcome: &RawOutcome) -> NormalizedResult {
    let columns = outcome.columns();
    if columns.is_empty() {
        return NormalizedResult::empty();
    }

    let pool = ColumnPool::new(columns);
    let rows = outcome.rows();
    let mut result = NormalizedResult::with_columns(&pool, rows.len());
    for raw_row in rows {
        result.push(decode_row(&pool, raw_row));
    }
    result
}

// Positions past the end of a short row decode to Null so every row keeps
// the full column set; values past the last column are dropped.
fn decode_row(pool: &ColumnPool, raw_row: &RawRow) -> NormalizedRow {
    let mut row = NormalizedRow::with_capacity(pool.len());
    for (index, name) in pool.names().iter().enumerate() {
        let value = raw_row.get(index).map_or(FieldValue::Null, |raw| raw.decode());
        row.insert(Rc::clone(name), value);
    }
    row
}
