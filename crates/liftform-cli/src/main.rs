//! Liftform CLI Entry Point
//!
//! Main entry point for the liftform command-line tool.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use liftform_cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            liftform_cli::analyze::execute(args)?;
        }
        Commands::Version => {
            println!("liftform {}", env!("CARGO_PKG_VERSION"));
            println!("Core module version: {}", liftform_core::VERSION);
        }
    }

    Ok(())
}
