use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ft_cli::commands::{calc, codes, run};
use ft_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match cli.command {
        Some(Commands::Run { json }) => run::run(json),
        Some(Commands::Calc { code, values, json }) => calc::run(&code, &values, json),
        Some(Commands::Codes { json }) => codes::run(json),
        // Bare `ft` processes the sample packets.
        None => run::run(false),
    }
}
