//! Codes command: list the activity code registry.

use std::fmt::Write;

use anyhow::Result;
use ft_core::REGISTRY;
use serde::Serialize;

/// Registry row for display.
#[derive(Debug, Clone, Serialize)]
pub struct CodeRow {
    pub code: &'static str,
    pub workout: &'static str,
    pub values: usize,
}

/// Snapshot of the registry as display rows.
#[must_use]
pub fn registry_rows() -> Vec<CodeRow> {
    REGISTRY
        .iter()
        .map(|entry| CodeRow {
            code: entry.code.as_str(),
            workout: entry.workout,
            values: entry.arity,
        })
        .collect()
}

/// Formats the rows for human-readable output.
#[must_use]
pub fn format_codes(rows: &[CodeRow]) -> String {
    let mut output = String::new();

    writeln!(output, "{:<4}  {:<13}  {}", "Code", "Workout", "Values").unwrap();
    writeln!(output, "────  ─────────────  ──────").unwrap();
    for row in rows {
        writeln!(output, "{:<4}  {:<13}  {}", row.code, row.workout, row.values).unwrap();
    }

    output
}

/// Runs the codes command.
pub fn run(json: bool) -> Result<()> {
    let rows = registry_rows();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_codes(&rows));
    }

    Ok(())
}
