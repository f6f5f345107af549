//! Liftform CLI
//!
//! Command-line interface for the liftform technique engine: load a
//! recorded pose sample and score every repetition in it.
//!
//! # Usage
//!
//! ```bash
//! # Score a recorded squat set
//! liftform analyze session.json --lift squat
//!
//! # Same report as JSON, e.g. for piping into jq
//! liftform analyze session.json --lift bench --format json
//! ```

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

pub mod analyze;

/// Liftform command line interface
#[derive(Parser, Debug)]
#[command(name = "liftform")]
#[command(author, version, about = "Barbell technique analysis from 2D pose samples")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a recorded pose sample
    Analyze(analyze::AnalyzeArgs),

    /// Display version information
    Version,
}
