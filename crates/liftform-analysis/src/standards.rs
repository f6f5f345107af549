//! Per-lift technique thresholds.
//!
//! Standards are plain values passed into every pipeline call, so tests
//! and callers can substitute stricter or looser thresholds without any
//! process-wide state. All tempo ranges are closed.

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Squat thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquatStandards {
    /// Minimum hip-below-knee depth score.
    pub depth_threshold: f64,
    /// Largest acceptable knee angle at the bottom, degrees.
    pub knee_angle_max: f64,
    /// Largest acceptable hip angle at the bottom, degrees.
    pub hip_angle_max: f64,
    /// Largest acceptable forward lean at the bottom, degrees.
    pub torso_angle_max: f64,
    /// Acceptable average lowering speed.
    pub eccentric_range: RangeInclusive<f64>,
    /// Acceptable average lifting speed.
    pub concentric_range: RangeInclusive<f64>,
}

impl Default for SquatStandards {
    fn default() -> Self {
        Self {
            depth_threshold: 0.02,
            knee_angle_max: 110.0,
            hip_angle_max: 120.0,
            torso_angle_max: 55.0,
            eccentric_range: 0.15..=1.2,
            concentric_range: 0.15..=1.2,
        }
    }
}

/// Bench press thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchStandards {
    /// Minimum wrist-below-shoulder touch score.
    pub touch_threshold: f64,
    /// Smallest elbow angle that counts as locked out, degrees.
    pub elbow_lockout_min: f64,
    /// Acceptable average lowering speed.
    pub eccentric_range: RangeInclusive<f64>,
    /// Acceptable average pressing speed.
    pub concentric_range: RangeInclusive<f64>,
}

impl Default for BenchStandards {
    fn default() -> Self {
        Self {
            touch_threshold: 0.08,
            elbow_lockout_min: 165.0,
            eccentric_range: 0.12..=1.2,
            concentric_range: 0.12..=1.2,
        }
    }
}

/// Deadlift thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeadliftStandards {
    /// Smallest hip angle that counts as locked out, degrees.
    pub hip_lockout_min: f64,
    /// Smallest knee angle that counts as locked out, degrees.
    pub knee_lockout_min: f64,
    /// Largest acceptable torso angle at the bottom, degrees.
    pub torso_angle_max: f64,
    /// Acceptable average lowering speed.
    pub eccentric_range: RangeInclusive<f64>,
    /// Acceptable average pulling speed.
    pub concentric_range: RangeInclusive<f64>,
}

impl Default for DeadliftStandards {
    fn default() -> Self {
        Self {
            hip_lockout_min: 165.0,
            knee_lockout_min: 170.0,
            torso_angle_max: 45.0,
            eccentric_range: 0.12..=1.4,
            concentric_range: 0.12..=1.4,
        }
    }
}

/// Thresholds for all three lifts.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiftStandards {
    pub squat: SquatStandards,
    pub bench: BenchStandards,
    pub deadlift: DeadliftStandards,
}
