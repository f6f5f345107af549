//! Analyze subcommand
//!
//! Loads a recorded pose sample, runs the technique pipeline over it with
//! the default standards, and prints a per-rep breakdown or the full
//! report as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use tracing::info;

use liftform_analysis::{analyze, AnalysisReport, LiftStandards, RepAnalysis};
use liftform_core::LiftType;
use liftform_session::series_from_file;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to a recorded pose sample (JSON)
    pub sample: PathBuf,

    /// Lift to score the sample as
    #[arg(short, long, value_enum)]
    pub lift: LiftArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Lift argument enum for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LiftArg {
    Squat,
    Bench,
    Deadlift,
}

impl From<LiftArg> for LiftType {
    fn from(val: LiftArg) -> Self {
        match val {
            LiftArg::Squat => LiftType::Squat,
            LiftArg::Bench => LiftType::Bench,
            LiftArg::Deadlift => LiftType::Deadlift,
        }
    }
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable per-rep breakdown
    #[default]
    Text,
    /// Serialized analysis report
    Json,
}

/// Execute the analyze command
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let series = series_from_file(&args.sample)
        .with_context(|| format!("failed to load sample {}", args.sample.display()))?;
    let lift: LiftType = args.lift.into();

    info!(
        frames = series.len(),
        fps = series.fps,
        lift = %lift,
        "sample loaded"
    );

    let report = analyze(&series, lift, &LiftStandards::default());

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_report(&report),
    }

    Ok(())
}

/// Print the human-readable report
fn print_report(report: &AnalysisReport) {
    println!(
        "{} {} analysis: {} rep(s)",
        "[liftform]".bright_cyan().bold(),
        report.lift.display_name(),
        report.rep_count().to_string().bold()
    );
    println!();

    if report.reps.is_empty() {
        println!("No repetitions detected in the sample.");
        return;
    }

    for rep in &report.reps {
        print_rep(rep);
    }

    if report.summary_issues.is_empty() {
        println!("{} All reps clean.", "[OK]".green().bold());
    } else {
        println!(
            "{} {} issue(s) across the set:",
            "[ISSUES]".yellow().bold(),
            report.summary_issues.len()
        );
        for issue in &report.summary_issues {
            println!("  - {}", issue.yellow());
        }
    }
}

/// Print one repetition block
fn print_rep(rep: &RepAnalysis) {
    let metrics = &rep.metrics;
    let segment = metrics.segment;

    println!(
        "{}  frames {}..{}, bottom {}",
        format!("Rep {}", rep.index).bold(),
        segment.start,
        segment.end,
        segment.bottom
    );
    println!("  {} {}", "Angles:".dimmed(), metrics.angles.summary());
    println!("  {} {}", "ROM:".dimmed(), metrics.rom.summary());
    println!("  {} {}", "Tempo:".dimmed(), metrics.speeds.summary());
    if rep.issues.is_empty() {
        println!("  {} {}", "Form:".dimmed(), "clean".green());
    } else {
        println!("  {} {}", "Form:".dimmed(), rep.issues.join(", ").red());
    }
    println!();
}
