//! Output formatting for query command results.

use super::execute::QueryOutput;
use crate::output::{render_grid, Outputable};

impl Outputable for QueryOutput {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Query: {}", self.statement), String::new()];

        let columns = self.result.columns();
        if columns.is_empty() {
            lines.push("No columns returned.".to_string());
            return lines.join("\n");
        }

        let headers: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
        let cells: Vec<Vec<String>> = self
            .result
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|name| row.get(name).map(ToString::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();

        lines.extend(render_grid(&headers, &cells));
        lines.push(String::new());
        lines.push(format!("{} row(s)", self.result.len()));
        lines.join("\n")
    }
}
