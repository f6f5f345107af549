//! Per-repetition metric extraction.
//!
//! Each segment is summarized from three representative frames: angles
//! and raw range-of-motion scores come from the bottom frame, lockout
//! checks from the end frame, and tempo statistics from per-frame
//! vertical velocities of the primary joint across the eccentric
//! (start to bottom) and concentric (bottom to end) phases.
//!
//! Missing joints leave the corresponding field absent rather than
//! failing; a malformed segment yields `None` and is dropped upstream.

use liftform_core::geometry::{angle_degrees, angle_from_vertical_degrees, mean, std_deviation};
use liftform_core::{Joint, LiftType, PoseFrame, PoseSeries};

use crate::standards::{DeadliftStandards, LiftStandards};
use crate::types::{AngleMetrics, RepMetrics, RepSegment, RomMetrics, SpeedMetrics};

/// Compute all metrics for one segment.
///
/// Returns `None` when the segment indices are not strictly ordered
/// within the series.
#[must_use]
pub fn compute_rep_metrics(
    series: &PoseSeries,
    lift: LiftType,
    standards: &LiftStandards,
    segment: RepSegment,
    index: usize,
) -> Option<RepMetrics> {
    if !segment.ordered_within(series.len()) {
        return None;
    }

    let bottom = &series.frames[segment.bottom];
    let end = &series.frames[segment.end];

    let angles = bottom_angles(bottom, lift);
    let rom = range_of_motion(bottom, end, lift, standards);
    let speeds = phase_speeds(series, lift.primary_joint(), segment);

    Some(RepMetrics {
        index,
        angles,
        rom,
        speeds,
        segment,
    })
}

/// Joint angles at the bottom frame for the given lift.
fn bottom_angles(bottom: &PoseFrame, lift: LiftType) -> AngleMetrics {
    match lift {
        LiftType::Squat | LiftType::Deadlift => AngleMetrics {
            hip: joint_angle(bottom, Joint::Shoulder, Joint::Hip, Joint::Knee),
            knee: joint_angle(bottom, Joint::Hip, Joint::Knee, Joint::Ankle),
            elbow: None,
            torso: vertical_angle(bottom, Joint::Hip, Joint::Shoulder),
        },
        LiftType::Bench => AngleMetrics {
            elbow: joint_angle(bottom, Joint::Shoulder, Joint::Elbow, Joint::Wrist),
            ..AngleMetrics::default()
        },
    }
}

/// Raw ROM scores at the bottom frame plus lockout state at the end frame.
///
/// Pass flags stay empty here; rule evaluation fills them.
fn range_of_motion(
    bottom: &PoseFrame,
    end: &PoseFrame,
    lift: LiftType,
    standards: &LiftStandards,
) -> RomMetrics {
    match lift {
        LiftType::Squat => RomMetrics {
            score: height_difference(bottom, Joint::Hip, Joint::Knee),
            passed: None,
            lockout: None,
        },
        LiftType::Bench => RomMetrics {
            score: height_difference(bottom, Joint::Wrist, Joint::Shoulder),
            passed: None,
            lockout: joint_angle(end, Joint::Shoulder, Joint::Elbow, Joint::Wrist)
                .map(|elbow| elbow >= standards.bench.elbow_lockout_min),
        },
        LiftType::Deadlift => RomMetrics {
            score: None,
            passed: None,
            lockout: deadlift_lockout(end, &standards.deadlift),
        },
    }
}

/// Hip and knee extension at the end frame, both against their minima.
fn deadlift_lockout(end: &PoseFrame, standards: &DeadliftStandards) -> Option<bool> {
    let hip = joint_angle(end, Joint::Shoulder, Joint::Hip, Joint::Knee)?;
    let knee = joint_angle(end, Joint::Hip, Joint::Knee, Joint::Ankle)?;
    Some(hip >= standards.hip_lockout_min && knee >= standards.knee_lockout_min)
}

/// Tempo statistics over both phases of the segment.
fn phase_speeds(series: &PoseSeries, joint: Joint, segment: RepSegment) -> SpeedMetrics {
    let eccentric = phase_velocities(series, joint, segment.start, segment.bottom);
    let concentric = phase_velocities(series, joint, segment.bottom, segment.end);

    let absolute = |samples: &[f64]| samples.iter().map(|v| v.abs()).collect::<Vec<_>>();

    SpeedMetrics {
        eccentric_avg: mean(&absolute(&eccentric)),
        concentric_avg: mean(&absolute(&concentric)),
        // Signed samples, so direction reversals widen the spread
        eccentric_std: std_deviation(&eccentric),
    }
}

/// Signed vertical velocity for every usable consecutive pair in `from..=to`.
///
/// A pair with the joint missing on either frame is skipped.
fn phase_velocities(series: &PoseSeries, joint: Joint, from: usize, to: usize) -> Vec<f64> {
    (from..to)
        .filter_map(|i| {
            let y1 = series.frames[i].joint(joint)?.y;
            let y2 = series.frames[i + 1].joint(joint)?.y;
            Some((y2 - y1) * series.fps)
        })
        .collect()
}

/// Angle at `vertex` between `a` and `c`, when all three joints exist.
fn joint_angle(frame: &PoseFrame, a: Joint, vertex: Joint, c: Joint) -> Option<f64> {
    Some(angle_degrees(
        frame.joint(a)?,
        frame.joint(vertex)?,
        frame.joint(c)?,
    ))
}

/// Angle of the `from -> to` vector against vertical, when both joints exist.
fn vertical_angle(frame: &PoseFrame, from: Joint, to: Joint) -> Option<f64> {
    Some(angle_from_vertical_degrees(
        frame.joint(from)?,
        frame.joint(to)?,
    ))
}

/// Vertical gap between two joints at one frame.
fn height_difference(frame: &PoseFrame, upper: Joint, lower: Joint) -> Option<f64> {
    Some(frame.joint(upper)?.y - frame.joint(lower)?.y)
}
