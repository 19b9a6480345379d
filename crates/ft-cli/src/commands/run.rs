//! Run command: process the built-in sample packets.
//!
//! This is also the behavior of a bare `ft` invocation: decode each packet,
//! compute its summary, and print one line per reading in input order.

use std::fmt::Write;

use anyhow::{Context, Result};
use ft_core::{Workout, build_workout};

/// Sample readings, one `(code, values)` packet per workout type.
pub const SAMPLE_PACKETS: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

/// Formats the summaries for the given packets, one line per packet.
pub fn format_packets(packets: &[(&str, &[f64])], json: bool) -> Result<String> {
    let mut output = String::new();

    for &(code, values) in packets {
        let workout = build_workout(code, values)
            .with_context(|| format!("failed to decode {code} packet"))?;
        let summary = workout.summary();
        tracing::debug!(code, workout = summary.workout, "packet processed");

        if json {
            writeln!(output, "{}", serde_json::to_string(&summary)?).unwrap();
        } else {
            writeln!(output, "{summary}").unwrap();
        }
    }

    Ok(output)
}

/// Runs the command over the sample packets.
pub fn run(json: bool) -> Result<()> {
    let output = format_packets(SAMPLE_PACKETS, json)?;
    print!("{output}");
    Ok(())
}
