//! End-to-end technique analysis for one pose series.
//!
//! 1. Segment the series into repetitions.
//! 2. Compute metrics per segment, dropping malformed segments.
//! 3. Run the per-lift rule checklist over each rep.
//! 4. Aggregate a deduplicated, lexicographically sorted issue summary.
//!
//! The whole pass is a pure function: identical inputs produce an
//! identical report, and nothing is retained between calls. Callers
//! may re-run it on growing windows of the same stream.

use std::collections::BTreeSet;

use liftform_core::{LiftType, PoseSeries};

use crate::metrics::compute_rep_metrics;
use crate::rules::evaluate;
use crate::segmenter::segment_reps;
use crate::standards::LiftStandards;
use crate::types::{AnalysisReport, RepAnalysis, RepMetrics};

/// Analyze a pose series as the given lift.
///
/// A series with no detectable repetitions produces an empty report,
/// not an error.
#[must_use]
pub fn analyze(series: &PoseSeries, lift: LiftType, standards: &LiftStandards) -> AnalysisReport {
    let segments = segment_reps(series, lift);

    let reps: Vec<RepAnalysis> = segments
        .iter()
        .enumerate()
        .filter_map(|(i, &segment)| compute_rep_metrics(series, lift, standards, segment, i + 1))
        .map(|metrics| {
            let (rom, issues) = evaluate(&metrics, lift, standards);
            let metrics = RepMetrics { rom, ..metrics };
            RepAnalysis {
                index: metrics.index,
                metrics,
                issues,
            }
        })
        .collect();

    let summary: BTreeSet<String> = reps
        .iter()
        .flat_map(|rep| rep.issues.iter().cloned())
        .collect();

    AnalysisReport {
        lift,
        reps,
        summary_issues: summary.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::SquatStandards;
    use liftform_core::{Joint, Point2, PoseFrame};
    use std::f64::consts::TAU;

    const FPS: f64 = 30.0;
    const PERIOD_SECS: f64 = 1.5;

    /// Two clean repetitions of a side-view squat.
    fn squat_series() -> PoseSeries {
        let frames = (0..136)
            .map(|i| {
                let t = i as f64 / FPS;
                let phase = (1.0 + (TAU * t / PERIOD_SECS).sin()) / 2.0;
                let mut frame = PoseFrame::new(i, t);
                frame.set_joint(
                    Joint::Hip,
                    Point2::new(0.50 - 0.08 * phase, 0.52 - 0.16 * phase),
                );
                frame.set_joint(
                    Joint::Shoulder,
                    Point2::new(0.50 + 0.02 * phase, 0.80 - 0.20 * phase),
                );
                frame.set_joint(Joint::Knee, Point2::new(0.55, 0.33));
                frame.set_joint(Joint::Ankle, Point2::new(0.56, 0.12));
                frame
            })
            .collect();
        PoseSeries::new(FPS, frames).unwrap()
    }

    #[test]
    fn short_series_reports_zero_reps() {
        let series = PoseSeries::new(FPS, Vec::new()).unwrap();
        let report = analyze(&series, LiftType::Squat, &LiftStandards::default());
        assert_eq!(report.rep_count(), 0);
        assert!(report.is_clean());
        assert_eq!(report.lift, LiftType::Squat);
    }

    #[test]
    fn clean_squat_yields_two_numbered_reps() {
        let report = analyze(&squat_series(), LiftType::Squat, &LiftStandards::default());

        assert_eq!(report.rep_count(), 2);
        assert!(report.is_clean());
        assert_eq!(report.reps[0].index, 1);
        assert_eq!(report.reps[1].index, 2);
        assert!(report.reps[0].metrics.rom.passed == Some(true));
        assert!(report.reps[0].metrics.segment.start < report.reps[1].metrics.segment.start);
    }

    #[test]
    fn summary_is_the_sorted_union_of_rep_issues() {
        let strict = LiftStandards {
            squat: SquatStandards {
                knee_angle_max: 90.0,
                hip_angle_max: 70.0,
                ..SquatStandards::default()
            },
            ..LiftStandards::default()
        };
        let report = analyze(&squat_series(), LiftType::Squat, &strict);

        assert_eq!(report.rep_count(), 2);
        for rep in &report.reps {
            assert_eq!(rep.issues, vec!["Knee angle too open", "Hip angle too open"]);
        }
        // Duplicates collapse and the union sorts lexicographically
        assert_eq!(
            report.summary_issues,
            vec!["Hip angle too open", "Knee angle too open"]
        );
    }

    #[test]
    fn repeated_analysis_is_identical() {
        let series = squat_series();
        let standards = LiftStandards::default();
        let first = analyze(&series, LiftType::Squat, &standards);
        let second = analyze(&series, LiftType::Squat, &standards);
        assert_eq!(first, second);
    }
}
