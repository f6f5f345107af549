//! Barbell technique analysis engine.
//!
//! Scores squat, bench press, and deadlift technique from a 2D
//! body-joint time series, producing a per-repetition breakdown of
//! joint angles, range of motion, tempo, and technique issues.
//!
//! # Stages
//!
//! - **Segmenter**: repetition boundaries from the smoothed primary
//!   joint trajectory
//! - **Metrics**: joint angles, range-of-motion scores, and phase
//!   speeds per repetition
//! - **Rules**: ordered per-lift checklists over those metrics
//! - **Pipeline**: one call from series to [`AnalysisReport`]
//!
//! The engine is total over well-typed input: malformed or incomplete
//! data degrades to fewer reps or absent metrics, never an error.
//!
//! # Example
//!
//! ```rust
//! use liftform_analysis::{analyze, LiftStandards};
//! use liftform_core::{LiftType, PoseSeries};
//!
//! let series = PoseSeries::new(30.0, Vec::new()).unwrap();
//! let report = analyze(&series, LiftType::Squat, &LiftStandards::default());
//!
//! // No frames means no reps, not a failure
//! assert_eq!(report.rep_count(), 0);
//! ```

#![forbid(unsafe_code)]

pub mod metrics;
pub mod pipeline;
pub mod rules;
pub mod segmenter;
pub mod standards;
pub mod types;

// Re-export the pipeline entry points and report types for convenience
pub use metrics::compute_rep_metrics;
pub use pipeline::analyze;
pub use rules::{evaluate, ECCENTRIC_STD_MAX};
pub use segmenter::segment_reps;
pub use standards::{BenchStandards, DeadliftStandards, LiftStandards, SquatStandards};
pub use types::{
    AnalysisReport, AngleMetrics, RepAnalysis, RepMetrics, RepSegment, RomMetrics, SpeedMetrics,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
