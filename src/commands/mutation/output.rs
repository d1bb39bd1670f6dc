//! Output formatting for execute command results.

use super::execute::MutationResult;
use crate::output::Outputable;

impl Outputable for MutationResult {
    fn to_table(&self) -> String {
        format!(
            "Execute: {}\n\nStatus: {} ({})",
            self.statement, self.status, self.code
        )
    }
}
