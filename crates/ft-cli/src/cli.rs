//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Fitness workout calculator.
///
/// Decodes raw sensor packets into workout statistics (distance, mean speed,
/// calories burned) and prints one summary line per reading.
#[derive(Debug, Parser)]
#[command(name = "ft", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Process the built-in sample packets (the default when no command is given).
    Run {
        /// Emit one JSON object per packet instead of the text line.
        #[arg(long)]
        json: bool,
    },

    /// Compute a single workout from an activity code and its sensor values.
    Calc {
        /// Three-letter activity code (SWM, RUN, WLK).
        code: String,

        /// Packet values in sensor order, e.g. `RUN 15000 1 75`.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Emit the summary as JSON instead of the text line.
        #[arg(long)]
        json: bool,
    },

    /// List the registered activity codes.
    Codes {
        /// Emit the registry as JSON.
        #[arg(long)]
        json: bool,
    },
}
