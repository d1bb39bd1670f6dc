//! Detection of data-version conflicts in engine responses.
//!
//! The engine reports an optimistic-concurrency failure as a plain execution
//! error whose message mentions a marker token. Matching free text is
//! brittle, so the rule lives here and nowhere else.

use super::outcome::{ErrorCode, RawOutcome};

/// Marker the engine puts in the message of a conflicting write.
pub const DATA_CONFLICT_MARKER: &str = "E_DATA_CONFLICT_ERROR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictMatcher {
    marker: String,
}

impl Default for ConflictMatcher {
    fn default() -> Self {
        Self::new(DATA_CONFLICT_MARKER)
    }
}

impl ConflictMatcher {
    /// Match a custom marker. An empty marker disables conflict detection.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// True when `outcome` is an execution error carrying the marker.
    pub fn is_version_conflict(&self, outcome: &RawOutcome) -> bool {
        !self.marker.is_empty()
            && outcome.error_code() == ErrorCode::ExecutionError
            && outcome.message().contains(&self.marker)
    }
}
