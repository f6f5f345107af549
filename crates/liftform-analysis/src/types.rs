//! Per-repetition metric and report types.

use liftform_core::LiftType;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frame indices bounding one repetition.
///
/// Valid segments satisfy `start < bottom < end` with `end` inside the
/// series; [`RepSegment::ordered_within`] checks both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepSegment {
    /// Frame index at the top of the movement where the rep begins.
    pub start: usize,
    /// Frame index at the deepest point of the rep.
    pub bottom: usize,
    /// Frame index at the top of the movement where the rep ends.
    pub end: usize,
}

impl RepSegment {
    /// Whether the indices are strictly ordered and inside a series of
    /// `frame_count` frames.
    #[must_use]
    pub fn ordered_within(&self, frame_count: usize) -> bool {
        self.start < self.bottom && self.bottom < self.end && self.end < frame_count
    }
}

/// Joint angles in degrees, measured at the bottom frame.
///
/// A field is absent when the lift does not use it or the joints it
/// needs were not detected at that frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleMetrics {
    /// Shoulder-hip-knee angle (squat, deadlift).
    pub hip: Option<f64>,
    /// Hip-knee-ankle angle (squat, deadlift).
    pub knee: Option<f64>,
    /// Shoulder-elbow-wrist angle (bench).
    pub elbow: Option<f64>,
    /// Hip-to-shoulder deviation from vertical (squat, deadlift).
    pub torso: Option<f64>,
}

impl AngleMetrics {
    /// One-line rendering of the present angles, e.g. `"Hip 130°, Knee 95°"`.
    ///
    /// Returns `"n/a"` when no angle was measured.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(hip) = self.hip {
            parts.push(format!("Hip {hip:.0}°"));
        }
        if let Some(knee) = self.knee {
            parts.push(format!("Knee {knee:.0}°"));
        }
        if let Some(elbow) = self.elbow {
            parts.push(format!("Elbow {elbow:.0}°"));
        }
        if let Some(torso) = self.torso {
            parts.push(format!("Torso {torso:.0}°"));
        }
        if parts.is_empty() {
            "n/a".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Range-of-motion measurements.
///
/// `score` is a raw vertical difference at the bottom frame (hip over
/// knee for squat, wrist over shoulder for bench); `passed` stays empty
/// until rule evaluation compares it against the configured threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RomMetrics {
    /// Raw depth or touch score.
    pub score: Option<f64>,
    /// Whether the score cleared the configured threshold.
    pub passed: Option<bool>,
    /// Whether the lockout angles at the end frame cleared their minima
    /// (bench elbow, deadlift hip and knee).
    pub lockout: Option<bool>,
}

impl RomMetrics {
    /// One-line rendering of the present measurements, e.g.
    /// `"Depth 0.050, ROM OK, Lockout OK"`.
    ///
    /// Returns `"n/a"` when nothing was measured.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(score) = self.score {
            parts.push(format!("Depth {score:.3}"));
        }
        if let Some(passed) = self.passed {
            parts.push(if passed { "ROM OK" } else { "ROM Short" }.to_string());
        }
        if let Some(lockout) = self.lockout {
            parts.push(if lockout { "Lockout OK" } else { "Lockout Short" }.to_string());
        }
        if parts.is_empty() {
            "n/a".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Vertical speed statistics of the primary joint, per phase.
///
/// Averages are means of absolute per-frame velocities; the deviation
/// is the population standard deviation of the signed eccentric
/// samples. Phases with no usable frame pairs report 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedMetrics {
    /// Average lowering speed, start to bottom.
    pub eccentric_avg: f64,
    /// Average lifting speed, bottom to end.
    pub concentric_avg: f64,
    /// Spread of the signed eccentric velocity samples.
    pub eccentric_std: f64,
}

impl SpeedMetrics {
    /// One-line rendering, e.g. `"Ecc 0.500, Con 0.500, Var 0.100"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Ecc {:.3}, Con {:.3}, Var {:.3}",
            self.eccentric_avg, self.concentric_avg, self.eccentric_std
        )
    }
}

/// All metrics computed for one repetition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepMetrics {
    /// 1-based repetition number within the series.
    pub index: usize,
    /// Joint angles at the bottom frame.
    pub angles: AngleMetrics,
    /// Range-of-motion measurements.
    pub rom: RomMetrics,
    /// Tempo statistics.
    pub speeds: SpeedMetrics,
    /// The frames this rep spans.
    pub segment: RepSegment,
}

/// One repetition's metrics together with the issues raised against it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepAnalysis {
    /// 1-based repetition number within the series.
    pub index: usize,
    /// Metrics with rule-derived pass flags filled in.
    pub metrics: RepMetrics,
    /// Issues in checklist order; empty for a clean rep.
    pub issues: Vec<String>,
}

/// Full analysis of one pose series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisReport {
    /// The lift the series was scored as.
    pub lift: LiftType,
    /// Per-rep breakdowns in chronological order.
    pub reps: Vec<RepAnalysis>,
    /// Sorted, deduplicated union of all per-rep issues.
    pub summary_issues: Vec<String>,
}

impl AnalysisReport {
    /// Report with no detected repetitions.
    #[must_use]
    pub fn empty(lift: LiftType) -> Self {
        Self {
            lift,
            reps: Vec::new(),
            summary_issues: Vec::new(),
        }
    }

    /// Number of repetitions detected.
    #[must_use]
    pub fn rep_count(&self) -> usize {
        self.reps.len()
    }

    /// Whether no rep raised any issue.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.summary_issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_ordering_check() {
        let seg = RepSegment {
            start: 2,
            bottom: 5,
            end: 9,
        };
        assert!(seg.ordered_within(10));
        assert!(!seg.ordered_within(9));

        let flat = RepSegment {
            start: 5,
            bottom: 5,
            end: 9,
        };
        assert!(!flat.ordered_within(100));
    }

    #[test]
    fn empty_report_is_clean() {
        let report = AnalysisReport::empty(LiftType::Squat);
        assert_eq!(report.rep_count(), 0);
        assert!(report.is_clean());
    }

    #[test]
    fn default_metrics_have_no_values() {
        let angles = AngleMetrics::default();
        assert!(angles.hip.is_none());
        assert!(angles.torso.is_none());

        let rom = RomMetrics::default();
        assert!(rom.score.is_none());
        assert!(rom.lockout.is_none());
    }

    #[test]
    fn angle_summary_lists_present_angles_in_order() {
        let angles = AngleMetrics {
            hip: Some(130.4),
            knee: Some(94.6),
            elbow: None,
            torso: Some(40.0),
        };
        assert_eq!(angles.summary(), "Hip 130°, Knee 95°, Torso 40°");
        assert_eq!(AngleMetrics::default().summary(), "n/a");
    }

    #[test]
    fn rom_summary_renders_score_and_flags() {
        let rom = RomMetrics {
            score: Some(0.0504),
            passed: Some(true),
            lockout: Some(false),
        };
        assert_eq!(rom.summary(), "Depth 0.050, ROM OK, Lockout Short");

        let lockout_only = RomMetrics {
            lockout: Some(true),
            ..RomMetrics::default()
        };
        assert_eq!(lockout_only.summary(), "Lockout OK");
        assert_eq!(RomMetrics::default().summary(), "n/a");
    }

    #[test]
    fn speed_summary_uses_three_decimals() {
        let speeds = SpeedMetrics {
            eccentric_avg: 0.5,
            concentric_avg: 0.5,
            eccentric_std: 0.1,
        };
        assert_eq!(speeds.summary(), "Ecc 0.500, Con 0.500, Var 0.100");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serde_roundtrip() {
        let report = AnalysisReport {
            lift: LiftType::Bench,
            reps: vec![RepAnalysis {
                index: 1,
                metrics: RepMetrics {
                    index: 1,
                    angles: AngleMetrics {
                        elbow: Some(92.0),
                        ..AngleMetrics::default()
                    },
                    rom: RomMetrics {
                        score: Some(0.11),
                        passed: Some(true),
                        lockout: Some(true),
                    },
                    speeds: SpeedMetrics {
                        eccentric_avg: 0.4,
                        concentric_avg: 0.5,
                        eccentric_std: 0.05,
                    },
                    segment: RepSegment {
                        start: 3,
                        bottom: 19,
                        end: 36,
                    },
                },
                issues: Vec::new(),
            }],
            summary_issues: Vec::new(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
