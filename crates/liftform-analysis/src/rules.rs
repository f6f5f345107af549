//! Ordered technique checks per lift.
//!
//! Evaluation is a pure mapping from one rep's metrics and the
//! configured standards to a finalized [`RomMetrics`] (pass flags
//! filled in) plus the issues raised, in checklist order. That order
//! is part of the contract: it fixes how issues appear in a rep's
//! list, and the report summary sorts over exactly these strings.
//!
//! Absent metrics are skipped, never flagged. Tempo ranges are closed
//! on both ends.

use std::ops::RangeInclusive;

use liftform_core::LiftType;

use crate::standards::{BenchStandards, DeadliftStandards, LiftStandards, SquatStandards};
use crate::types::{RepMetrics, RomMetrics, SpeedMetrics};

/// Largest acceptable spread of the signed eccentric velocity samples.
/// Shared by all three lifts.
pub const ECCENTRIC_STD_MAX: f64 = 0.25;

/// Evaluate one rep against the standards for its lift.
#[must_use]
pub fn evaluate(
    metrics: &RepMetrics,
    lift: LiftType,
    standards: &LiftStandards,
) -> (RomMetrics, Vec<String>) {
    match lift {
        LiftType::Squat => evaluate_squat(metrics, &standards.squat),
        LiftType::Bench => evaluate_bench(metrics, &standards.bench),
        LiftType::Deadlift => evaluate_deadlift(metrics, &standards.deadlift),
    }
}

fn evaluate_squat(metrics: &RepMetrics, standards: &SquatStandards) -> (RomMetrics, Vec<String>) {
    let mut rom = metrics.rom;
    let mut issues = Vec::new();

    if let Some(score) = rom.score {
        let passed = score >= standards.depth_threshold;
        rom.passed = Some(passed);
        if !passed {
            issues.push("Depth too shallow".to_string());
        }
    }
    if let Some(knee) = metrics.angles.knee {
        if knee > standards.knee_angle_max {
            issues.push("Knee angle too open".to_string());
        }
    }
    if let Some(hip) = metrics.angles.hip {
        if hip > standards.hip_angle_max {
            issues.push("Hip angle too open".to_string());
        }
    }
    if let Some(torso) = metrics.angles.torso {
        if torso > standards.torso_angle_max {
            issues.push("Excessive forward lean".to_string());
        }
    }
    check_tempo(
        &metrics.speeds,
        &standards.eccentric_range,
        &standards.concentric_range,
        &mut issues,
    );

    (rom, issues)
}

fn evaluate_bench(metrics: &RepMetrics, standards: &BenchStandards) -> (RomMetrics, Vec<String>) {
    let mut rom = metrics.rom;
    let mut issues = Vec::new();

    if let Some(score) = rom.score {
        let passed = score >= standards.touch_threshold;
        rom.passed = Some(passed);
        if !passed {
            issues.push("Touch depth short".to_string());
        }
    }
    if rom.lockout == Some(false) {
        issues.push("Lockout incomplete".to_string());
    }
    check_tempo(
        &metrics.speeds,
        &standards.eccentric_range,
        &standards.concentric_range,
        &mut issues,
    );

    (rom, issues)
}

fn evaluate_deadlift(
    metrics: &RepMetrics,
    standards: &DeadliftStandards,
) -> (RomMetrics, Vec<String>) {
    // Depth scoring does not apply to a pull; only lockout survives
    let rom = RomMetrics {
        score: None,
        passed: None,
        lockout: metrics.rom.lockout,
    };
    let mut issues = Vec::new();

    if rom.lockout == Some(false) {
        issues.push("Lockout incomplete".to_string());
    }
    if let Some(torso) = metrics.angles.torso {
        if torso > standards.torso_angle_max {
            issues.push("Back angle too horizontal".to_string());
        }
    }
    check_tempo(
        &metrics.speeds,
        &standards.eccentric_range,
        &standards.concentric_range,
        &mut issues,
    );

    (rom, issues)
}

/// Speed averages against their closed ranges, then tempo stability.
fn check_tempo(
    speeds: &SpeedMetrics,
    eccentric_range: &RangeInclusive<f64>,
    concentric_range: &RangeInclusive<f64>,
    issues: &mut Vec<String>,
) {
    if !eccentric_range.contains(&speeds.eccentric_avg) {
        issues.push("Eccentric speed out of range".to_string());
    }
    if !concentric_range.contains(&speeds.concentric_avg) {
        issues.push("Concentric speed out of range".to_string());
    }
    if speeds.eccentric_std > ECCENTRIC_STD_MAX {
        issues.push("Eccentric tempo unstable".to_string());
    }
}
