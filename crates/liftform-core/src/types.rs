//! Core data types for pose series and lift selection.
//!
//! A [`PoseSeries`] is the engine's only input shape: an ordered sequence of
//! [`PoseFrame`]s plus a capture rate. Each frame holds an optional
//! [`Point2`] per tracked [`Joint`]; absent joints are a normal outcome,
//! never an error.
//!
//! Coordinates are normalized and gravity-aligned: x grows from left to
//! right, y grows upward, so a larger y is physically higher. Producers
//! holding image-space points (y down, top-left origin) must flip
//! `y = 1.0 - y` before building frames.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::JOINT_COUNT;

/// Body joints tracked by the analysis pipeline.
///
/// The discriminants index the per-frame joint array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Joint {
    /// Shoulder joint
    Shoulder = 0,
    /// Elbow joint
    Elbow = 1,
    /// Wrist joint
    Wrist = 2,
    /// Hip joint
    Hip = 3,
    /// Knee joint
    Knee = 4,
    /// Ankle joint
    Ankle = 5,
}

impl Joint {
    /// All tracked joints in index order.
    #[must_use]
    pub const fn all() -> [Self; JOINT_COUNT] {
        [
            Self::Shoulder,
            Self::Elbow,
            Self::Wrist,
            Self::Hip,
            Self::Knee,
            Self::Ankle,
        ]
    }

    /// Lowercase name, matching the stored-sample key format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Hip => "hip",
            Self::Knee => "knee",
            Self::Ankle => "ankle",
        }
    }

    /// Parses a lowercase joint name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "shoulder" => Some(Self::Shoulder),
            "elbow" => Some(Self::Elbow),
            "wrist" => Some(Self::Wrist),
            "hip" => Some(Self::Hip),
            "knee" => Some(Self::Knee),
            "ankle" => Some(Self::Ankle),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Joint {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Shoulder),
            1 => Ok(Self::Elbow),
            2 => Ok(Self::Wrist),
            3 => Ok(Self::Hip),
            4 => Ok(Self::Knee),
            5 => Ok(Self::Ankle),
            _ => Err(CoreError::unknown_joint(value)),
        }
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in the normalized capture plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// Horizontal coordinate, left to right.
    pub x: f64,
    /// Vertical coordinate, increasing upward.
    pub y: f64,
}

impl Point2 {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single observation of the tracked joints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoseFrame {
    /// Sequence index assigned by the producer.
    pub index: usize,
    /// Capture time in seconds, relative to the start of the series.
    pub timestamp_secs: f64,
    /// Joint positions indexed by [`Joint`]. Unobserved joints stay `None`.
    pub joints: [Option<Point2>; JOINT_COUNT],
}

impl PoseFrame {
    /// Creates a frame with no joints observed.
    #[must_use]
    pub const fn new(index: usize, timestamp_secs: f64) -> Self {
        Self {
            index,
            timestamp_secs,
            joints: [None; JOINT_COUNT],
        }
    }

    /// Records the position of one joint.
    pub fn set_joint(&mut self, joint: Joint, point: Point2) {
        self.joints[joint as usize] = Some(point);
    }

    /// Position of one joint, if observed.
    #[must_use]
    pub fn joint(&self, joint: Joint) -> Option<Point2> {
        self.joints[joint as usize]
    }

    /// Whether the joint was observed in this frame.
    #[must_use]
    pub fn has_joint(&self, joint: Joint) -> bool {
        self.joints[joint as usize].is_some()
    }
}

/// A timed sequence of pose frames.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoseSeries {
    /// Capture rate in frames per second. Finite and positive.
    pub fps: f64,
    /// Frames in capture order.
    pub frames: Vec<PoseFrame>,
}

impl PoseSeries {
    /// Creates a series after validating the capture rate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `fps` is not finite and
    /// positive.
    pub fn new(fps: f64, frames: Vec<PoseFrame>) -> CoreResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(CoreError::validation(format!(
                "fps must be finite and positive, got {}",
                fps
            )));
        }
        Ok(Self { fps, frames })
    }

    /// Number of frames in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the series holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// The barbell lifts the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum LiftType {
    /// Back squat
    Squat = 0,
    /// Bench press
    Bench = 1,
    /// Deadlift
    Deadlift = 2,
}

impl LiftType {
    /// All supported lifts.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Squat, Self::Bench, Self::Deadlift]
    }

    /// Joint whose vertical trajectory drives rep segmentation.
    #[must_use]
    pub const fn primary_joint(&self) -> Joint {
        match self {
            Self::Bench => Joint::Wrist,
            Self::Squat | Self::Deadlift => Joint::Hip,
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Bench => "bench",
            Self::Deadlift => "deadlift",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Bench => "Bench Press",
            Self::Deadlift => "Deadlift",
        }
    }
}

impl std::fmt::Display for LiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for LiftType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "squat" => Ok(Self::Squat),
            "bench" | "bench press" | "bench_press" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            _ => Err(CoreError::unknown_lift(s)),
        }
    }
}
