//! Execute tests for execute command.

#[cfg(test)]
mod tests {
    use super::super::MutationCmd;
    use crate::session::{ErrorCode, RawOutcome, SessionError, TransportError};
    use crate::test_utils::ScriptedSession;
    use rstest::rstest;

    crate::execute_test! {
        test_name: test_execute_success,
        session: ScriptedSession::new(),
        cmd: MutationCmd {
            statement: "UPDATE VERTEX \"p100\" SET player.age = 43".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.code, 0);
            assert_eq!(result.status, "SUCCEEDED");
            assert_eq!(result.statement, "UPDATE VERTEX \"p100\" SET player.age = 43");
        },
    }

    crate::execute_test! {
        test_name: test_execute_success_with_result_set,
        session: ScriptedSession::new().respond(RawOutcome::with_grid(
            vec!["x".to_string()],
            vec![],
        )),
        cmd: MutationCmd {
            statement: "?[x] <- [[1]] :put t {x}".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.code, ErrorCode::Succeeded.value());
        },
    }

    crate::execute_error_test! {
        test_name: test_execute_conflict,
        session: ScriptedSession::new().respond(RawOutcome::failed(
            ErrorCode::ExecutionError,
            "E_DATA_CONFLICT_ERROR: edge version mismatch",
        )),
        cmd: MutationCmd {
            statement: "UPSERT EDGE follow".to_string(),
        },
        matches: SessionError::VersionConflict { .. },
    }

    crate::execute_error_test! {
        test_name: test_execute_rpc_failure,
        session: ScriptedSession::new().fail(TransportError::new("connection reset")),
        cmd: MutationCmd {
            statement: "INSERT VERTEX x".to_string(),
        },
        matches: SessionError::RpcFailure { code: -3, .. },
    }

    crate::execute_error_test! {
        test_name: test_execute_semantic_error,
        session: ScriptedSession::new().respond(RawOutcome::failed(
            ErrorCode::SemanticError,
            "No schema found for `player'",
        )),
        cmd: MutationCmd {
            statement: "INSERT VERTEX player(name) VALUES \"p1\":(\"a\")".to_string(),
        },
        matches: SessionError::ExecutionError { code: -1009, .. },
    }
}
