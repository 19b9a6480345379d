//! Calc command: compute one workout from literal packet values.

use anyhow::{Context, Result};
use ft_core::{Workout, build_workout};

/// Decodes the packet and prints its summary.
pub fn run(code: &str, values: &[f64], json: bool) -> Result<()> {
    let workout = build_workout(code, values)
        .with_context(|| format!("failed to decode {code} packet"))?;
    let summary = workout.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
