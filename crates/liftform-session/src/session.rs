//! Live analysis sessions over a sliding frame window.
//!
//! A [`LiveSession`] buffers pose frames as a capture source produces
//! them, expires frames older than the configured window, and re-runs
//! the full analysis pipeline on demand. The pipeline itself is pure,
//! so repeated [`LiveSession::analyze_recent`] calls on a growing
//! buffer are safe and independent.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use liftform_analysis::{analyze, AnalysisReport, LiftStandards};
use liftform_core::{LiftType, Point2, PoseFrame, PoseSeries, JOINT_COUNT};

/// Unique identifier for one live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tuning for a live session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Sliding window length in seconds.
    pub window_secs: f64,
    /// Smallest buffer worth analyzing.
    pub min_frames: usize,
    /// Capture rate assumed when the buffered timestamps are unusable.
    pub fallback_fps: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_secs: 6.0,
            min_frames: 16,
            fallback_fps: 30.0,
        }
    }
}

impl SessionConfig {
    /// Set the sliding window length.
    #[must_use]
    pub fn with_window_secs(mut self, window_secs: f64) -> Self {
        self.window_secs = window_secs;
        self
    }

    /// Set the minimum buffer size for analysis.
    #[must_use]
    pub fn with_min_frames(mut self, min_frames: usize) -> Self {
        self.min_frames = min_frames;
        self
    }

    /// Set the capture rate fallback.
    #[must_use]
    pub fn with_fallback_fps(mut self, fallback_fps: f64) -> Self {
        self.fallback_fps = fallback_fps;
        self
    }
}

/// Frame buffer feeding the analysis pipeline during a live set.
///
/// Frames arrive through [`LiveSession::push`] in capture order with
/// monotonically non-decreasing timestamps; anything older than
/// `window_secs` behind the newest frame is dropped.
pub struct LiveSession {
    /// Session identity, stable for the session's lifetime.
    id: SessionId,
    /// The lift being performed.
    lift: LiftType,
    /// Thresholds applied on every analysis pass.
    standards: LiftStandards,
    /// Window and rate tuning.
    config: SessionConfig,
    /// Wall-clock session start.
    started_at: DateTime<Utc>,
    /// Buffered frames in capture order.
    frames: Vec<PoseFrame>,
    /// Capture index for the next pushed frame.
    next_index: usize,
}

impl LiveSession {
    /// Create a session for one lift.
    #[must_use]
    pub fn new(lift: LiftType, standards: LiftStandards, config: SessionConfig) -> Self {
        Self {
            id: SessionId::new(),
            lift,
            standards,
            config,
            started_at: Utc::now(),
            frames: Vec::new(),
            next_index: 0,
        }
    }

    /// Create a session with default standards and tuning.
    #[must_use]
    pub fn with_defaults(lift: LiftType) -> Self {
        Self::new(lift, LiftStandards::default(), SessionConfig::default())
    }

    /// Session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// The lift this session scores.
    #[must_use]
    pub const fn lift(&self) -> LiftType {
        self.lift
    }

    /// Wall-clock time the session was created.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Number of frames currently buffered.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append one captured frame and expire anything that has slid out
    /// of the window.
    pub fn push(&mut self, joints: [Option<Point2>; JOINT_COUNT], timestamp_secs: f64) {
        let mut frame = PoseFrame::new(self.next_index, timestamp_secs);
        frame.joints = joints;
        self.next_index += 1;
        self.frames.push(frame);
        self.expire(timestamp_secs);
    }

    /// Run the analysis pipeline over the buffered window.
    ///
    /// Returns `None` until `min_frames` frames are buffered. The
    /// window is rebased to index 0 and timestamp 0 so reports read
    /// the same regardless of how long the session has run.
    #[must_use]
    pub fn analyze_recent(&self) -> Option<AnalysisReport> {
        if self.frames.len() < self.config.min_frames {
            return None;
        }

        let fps = estimate_fps(&self.frames).unwrap_or(self.config.fallback_fps);
        let base_secs = self.frames[0].timestamp_secs;
        let frames = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let mut rebased = frame.clone();
                rebased.index = i;
                rebased.timestamp_secs = frame.timestamp_secs - base_secs;
                rebased
            })
            .collect();

        let series = PoseSeries::new(fps, frames).ok()?;
        Some(analyze(&series, self.lift, &self.standards))
    }

    /// Analyze the window and reduce it to one coaching cue.
    #[must_use]
    pub fn live_feedback(&self) -> Option<String> {
        self.analyze_recent()
            .map(|report| feedback_message(&report))
    }

    /// Drop all buffered frames and restart capture indexing.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.next_index = 0;
    }

    /// Drop frames that ended up behind the window.
    fn expire(&mut self, now_secs: f64) {
        let cutoff = now_secs - self.config.window_secs;
        match self
            .frames
            .iter()
            .position(|frame| frame.timestamp_secs >= cutoff)
        {
            Some(first_kept) => {
                self.frames.drain(..first_kept);
            }
            None => self.frames.clear(),
        }
    }
}

/// Capture rate from the median positive timestamp delta.
///
/// Returns `None` for buffers of four frames or fewer, or when no
/// delta is positive. The median tolerates occasional dropped or
/// bursty frames better than a mean would.
#[must_use]
pub fn estimate_fps(frames: &[PoseFrame]) -> Option<f64> {
    if frames.len() <= 4 {
        return None;
    }
    let mut deltas: Vec<f64> = frames
        .windows(2)
        .map(|pair| pair[1].timestamp_secs - pair[0].timestamp_secs)
        .filter(|delta| *delta > 0.0)
        .collect();
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_by(f64::total_cmp);
    Some(1.0 / deltas[deltas.len() / 2])
}

/// One short cue for the most recent repetition.
#[must_use]
pub fn feedback_message(report: &AnalysisReport) -> String {
    match report.reps.last() {
        None => "Keep moving".to_string(),
        Some(rep) if rep.issues.is_empty() => "Good rep".to_string(),
        Some(rep) => rep.issues.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftform_analysis::{
        AngleMetrics, RepAnalysis, RepMetrics, RepSegment, RomMetrics, SpeedMetrics,
    };
    use liftform_core::Joint;
    use std::f64::consts::TAU;

    const FPS: f64 = 30.0;
    const PERIOD_SECS: f64 = 1.5;

    fn squat_joints(phase: f64) -> [Option<Point2>; JOINT_COUNT] {
        let mut joints = [None; JOINT_COUNT];
        joints[Joint::Hip as usize] =
            Some(Point2::new(0.50 - 0.08 * phase, 0.52 - 0.16 * phase));
        joints[Joint::Shoulder as usize] =
            Some(Point2::new(0.50 + 0.02 * phase, 0.80 - 0.20 * phase));
        joints[Joint::Knee as usize] = Some(Point2::new(0.55, 0.33));
        joints[Joint::Ankle as usize] = Some(Point2::new(0.56, 0.12));
        joints
    }

    fn push_squat_frames(session: &mut LiveSession, frame_count: usize) {
        for i in 0..frame_count {
            let t = i as f64 / FPS;
            let phase = (1.0 + (TAU * t / PERIOD_SECS).sin()) / 2.0;
            session.push(squat_joints(phase), t);
        }
    }

    #[test]
    fn too_few_frames_returns_none() {
        let mut session = LiveSession::with_defaults(LiftType::Squat);
        push_squat_frames(&mut session, 10);
        assert!(session.analyze_recent().is_none());
        assert!(session.live_feedback().is_none());
    }

    #[test]
    fn analysis_runs_over_the_buffer() {
        let mut session = LiveSession::with_defaults(LiftType::Squat);
        push_squat_frames(&mut session, 136);

        let report = session.analyze_recent().unwrap();
        assert_eq!(report.rep_count(), 2);
        assert!(report.is_clean());
        assert_eq!(session.live_feedback().as_deref(), Some("Good rep"));
    }

    #[test]
    fn old_frames_expire() {
        let config = SessionConfig::default().with_window_secs(1.0);
        let mut session =
            LiveSession::new(LiftType::Squat, LiftStandards::default(), config);
        push_squat_frames(&mut session, 61);

        // Last push at t = 2.0, so only t >= 1.0 survives
        assert_eq!(session.frame_count(), 31);
    }

    #[test]
    fn reset_clears_state() {
        let mut session = LiveSession::with_defaults(LiftType::Deadlift);
        push_squat_frames(&mut session, 40);
        assert!(!session.is_empty());

        session.reset();
        assert_eq!(session.frame_count(), 0);
        assert!(session.analyze_recent().is_none());
    }

    #[test]
    fn session_ids_are_unique() {
        let a = LiveSession::with_defaults(LiftType::Bench);
        let b = LiveSession::with_defaults(LiftType::Bench);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn fps_estimate_uses_the_median_delta() {
        let mut frames: Vec<PoseFrame> = (0..20)
            .map(|i| PoseFrame::new(i, i as f64 / 30.0))
            .collect();
        // One stalled capture should not skew the estimate
        frames[10].timestamp_secs += 0.4;

        let fps = estimate_fps(&frames).unwrap();
        assert!((fps - 30.0).abs() < 1.5, "estimated {fps}");
    }

    #[test]
    fn fps_estimate_needs_usable_deltas() {
        let few: Vec<PoseFrame> = (0..4).map(|i| PoseFrame::new(i, i as f64)).collect();
        assert!(estimate_fps(&few).is_none());

        let frozen: Vec<PoseFrame> = (0..20).map(|i| PoseFrame::new(i, 5.0)).collect();
        assert!(estimate_fps(&frozen).is_none());
    }

    #[test]
    fn frozen_timestamps_still_analyze_via_fallback() {
        let mut session = LiveSession::with_defaults(LiftType::Squat);
        for i in 0..40 {
            let phase = (1.0 + (TAU * (i as f64 / FPS) / PERIOD_SECS).sin()) / 2.0;
            session.push(squat_joints(phase), 0.0);
        }
        // No positive deltas, so the fallback rate applies
        assert!(session.analyze_recent().is_some());
    }

    #[test]
    fn feedback_reflects_the_last_rep() {
        let mut report = AnalysisReport::empty(LiftType::Squat);
        assert_eq!(feedback_message(&report), "Keep moving");

        let clean_rep = RepAnalysis {
            index: 1,
            metrics: RepMetrics {
                index: 1,
                angles: AngleMetrics::default(),
                rom: RomMetrics::default(),
                speeds: SpeedMetrics::default(),
                segment: RepSegment {
                    start: 0,
                    bottom: 10,
                    end: 20,
                },
            },
            issues: Vec::new(),
        };
        report.reps.push(clean_rep.clone());
        assert_eq!(feedback_message(&report), "Good rep");

        let mut flagged = clean_rep;
        flagged.index = 2;
        flagged.issues = vec![
            "Depth too shallow".to_string(),
            "Excessive forward lean".to_string(),
        ];
        report.reps.push(flagged);
        assert_eq!(
            feedback_message(&report),
            "Depth too shallow, Excessive forward lean"
        );
    }
}
