//! Output formatting for CLI commands.
//!
//! Responsibilities:
//! - Parse the `--output` flag.
//! - Render command outputs as aligned tables, JSON or YAML.
//!
//! Invariants:
//! - Outputs passed here never contain secret values.

use anyhow::Result;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json, yaml", s),
        }
    }
}

/// Outputs that can be shown as rows of cells.
pub trait TableRows {
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Format `value` in the requested output format.
pub fn format_output<T: Serialize + TableRows>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => format_table(&value.rows()),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

/// Left-align every column to its widest cell.
fn format_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if col + 1 == row.len() {
                    cell.clone()
                } else {
                    format!("{:<width$}", cell, width = widths[col])
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
