//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Render a header row and cells as aligned columns.
///
/// Columns are separated by ` | `, the header is underlined with `-+-`
/// joints, and trailing whitespace is trimmed from every line. A row
/// shorter than the header ends after its last cell.
pub fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(&widths, headers.iter().copied()));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(render_line(&widths, row.iter().map(String::as_str)));
    }
    lines
}

fn render_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(&w, cell)| format!("{:<w$}", cell, w = w))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid_aligns_columns() {
        let lines = render_grid(
            &["name", "age"],
            &[
                vec!["alice".to_string(), "30".to_string()],
                vec!["bob".to_string(), "NULL".to_string()],
            ],
        );
        assert_eq!(
            lines,
            vec![
                "name  | age",
                "------+-----",
                "alice | 30",
                "bob   | NULL",
            ]
        );
    }

    #[test]
    fn test_render_grid_short_row_has_no_dangling_separator() {
        let lines = render_grid(
            &["a", "b", "c"],
            &[
                vec!["x".to_string()],
                vec!["x".to_string(), "y".to_string()],
            ],
        );
        assert_eq!(lines[2], "x");
        assert_eq!(lines[3], "x | y");
    }

    #[test]
    fn test_render_grid_keeps_empty_middle_cell() {
        let lines = render_grid(
            &["a", "b", "c"],
            &[vec!["x".to_string(), String::new(), "z".to_string()]],
        );
        assert_eq!(lines[2], "x |   | z");
    }

    #[test]
    fn test_render_grid_header_only() {
        let lines = render_grid(&["id"], &[]);
        assert_eq!(lines, vec!["id", "--"]);
    }
}
