//! CozoDB session implementation.
//!
//! Wraps an embedded `DbInstance` so it can be driven through the
//! `RawSession` interface. Script failures come back as
//! `E_EXECUTION_ERROR` outcomes, not transport errors: there is no network
//! between us and the engine, so the only transport-level failure is using
//! the session after it was released.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::Path;

use cozo::{DataValue, DbInstance, NamedRows, Num, ScriptMutability};
use serde_json::Value as JsonValue;

use super::DbError;
use crate::session::{ErrorCode, GraphKind, GraphValue, RawOutcome, RawSession, RawValue, TransportError};

const PING_SCRIPT: &str = "?[x] := x = 1";

/// A session over an embedded CozoDB instance.
pub struct CozoSession {
    inner: DbInstance,
    released: Cell<bool>,
}

impl CozoSession {
    /// Opens a SQLite-backed CozoDB database at `path`.
    pub fn open_sqlite(path: &Path) -> Result<Self, DbError> {
        let inner = DbInstance::new("sqlite", path, "").map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self::from_instance(inner))
    }

    /// Opens an in-memory CozoDB database.
    pub fn open_mem() -> Result<Self, DbError> {
        let inner = DbInstance::new("mem", "", "").map_err(|e| DbError::OpenFailed {
            path: ":memory:".to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self::from_instance(inner))
    }

    pub fn from_instance(inner: DbInstance) -> Self {
        Self {
            inner,
            released: Cell::new(false),
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }
}

impl RawSession for CozoSession {
    fn raw_execute(&self, statement: &str) -> Result<RawOutcome, TransportError> {
        if self.released.get() {
            return Err(TransportError::with_code(
                ErrorCode::SessionInvalid,
                "session has been released",
            ));
        }
        if statement.trim().is_empty() {
            return Ok(RawOutcome::failed(ErrorCode::StatementEmpty, "statement is empty"));
        }

        match self
            .inner
            .run_script(statement, BTreeMap::new(), ScriptMutability::Mutable)
        {
            Ok(rows) => Ok(convert_named_rows(rows)),
            Err(e) => Ok(RawOutcome::failed(ErrorCode::ExecutionError, e.to_string())),
        }
    }

    fn release(&self) {
        self.released.set(true);
    }

    fn ping(&self) -> bool {
        !self.released.get()
            && self
                .inner
                .run_script(PING_SCRIPT, BTreeMap::new(), ScriptMutability::Immutable)
                .is_ok()
    }
}

/// Converts CozoDB's `NamedRows` into a successful raw outcome.
fn convert_named_rows(named_rows: NamedRows) -> RawOutcome {
    let rows = named_rows
        .rows
        .into_iter()
        .map(|row| row.into_iter().map(convert_value).collect())
        .collect();
    RawOutcome::with_grid(named_rows.headers, rows)
}

/// Maps a CozoDB value onto the engine's tagged union.
///
/// Strings travel as bytes like they do on the wire. Byte arrays become
/// hex-encoded opaque values; collections, JSON, UUIDs and the rest are
/// passed through opaque in their JSON form.
fn convert_value(value: DataValue) -> RawValue {
    match value {
        DataValue::Null => RawValue::Null,
        DataValue::Bool(b) => RawValue::Bool(b),
        DataValue::Num(Num::Int(i)) => RawValue::Int(i),
        DataValue::Num(Num::Float(f)) => RawValue::Float(f),
        DataValue::Str(s) => RawValue::Str(Some(s.to_string().into_bytes())),
        DataValue::Bytes(b) => RawValue::Graph(GraphValue::new(
            GraphKind::Bytes,
            JsonValue::String(hex::encode(b)),
        )),
        other => {
            let kind = match &other {
                DataValue::List(_) => GraphKind::List,
                DataValue::Set(_) => GraphKind::Set,
                DataValue::Json(_) => GraphKind::Map,
                _ => GraphKind::Other,
            };
            RawValue::Graph(GraphValue::new(kind, JsonValue::from(other)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_mem() {
        let session = CozoSession::open_mem().expect("in-memory db should open");
        assert!(!session.is_released());
    }

    #[test]
    fn test_execute_returns_grid() {
        let session = CozoSession::open_mem().unwrap();
        let outcome = session.raw_execute("?[x, y] := x = 1, y = 'a'").unwrap();

        assert!(outcome.is_success());
        assert_eq!(outcome.columns(), &["x".to_string(), "y".to_string()]);
        assert_eq!(outcome.rows(), &[vec![RawValue::Int(1), RawValue::str("a")]]);
    }

    #[test]
    fn test_script_error_is_execution_error_outcome() {
        let session = CozoSession::open_mem().unwrap();
        let outcome = session.raw_execute("?[x] := *missing_relation{x}").unwrap();

        assert_eq!(outcome.error_code(), ErrorCode::ExecutionError);
        assert!(!outcome.message().is_empty());
    }

    #[test]
    fn test_empty_statement() {
        let session = CozoSession::open_mem().unwrap();
        let outcome = session.raw_execute("   ").unwrap();
        assert_eq!(outcome.error_code(), ErrorCode::StatementEmpty);
    }

    #[test]
    fn test_release_invalidates_session() {
        let session = CozoSession::open_mem().unwrap();
        assert!(session.ping());

        session.release();

        assert!(!session.ping());
        let err = session.raw_execute(PING_SCRIPT).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionInvalid.value());
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(convert_value(DataValue::Null), RawValue::Null);
        assert_eq!(convert_value(DataValue::Bool(true)), RawValue::Bool(true));
        assert_eq!(convert_value(DataValue::Num(Num::Int(42))), RawValue::Int(42));
        assert_eq!(convert_value(DataValue::Num(Num::Float(3.5))), RawValue::Float(3.5));
        assert_eq!(convert_value(DataValue::Str("hello".into())), RawValue::str("hello"));
        assert_eq!(
            convert_value(DataValue::Bytes(vec![0xde, 0xad])),
            RawValue::Graph(GraphValue::new(GraphKind::Bytes, json!("dead")))
        );
    }

    #[test]
    fn test_list_conversion_is_opaque() {
        let list = DataValue::List(vec![DataValue::Num(Num::Int(1)), DataValue::Num(Num::Int(2))]);
        match convert_value(list) {
            RawValue::Graph(g) => {
                assert_eq!(g.kind, GraphKind::List);
                assert_eq!(g.value, json!([1, 2]));
            }
            other => panic!("Expected graph value, got {:?}", other),
        }
    }
}
