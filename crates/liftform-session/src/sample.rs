//! Recorded pose samples in JSON form.
//!
//! A sample document carries an optional capture rate and a list of
//! timed frames, each mapping joint names to `[x, y]` coordinate
//! arrays in the y-up normalized space:
//!
//! ```json
//! {
//!   "fps": 30.0,
//!   "frames": [
//!     { "t": 0.0, "points": { "hip": [0.46, 0.44], "knee": [0.55, 0.33] } }
//!   ]
//! }
//! ```
//!
//! Unknown joint names and coordinate arrays shorter than two entries
//! are skipped. When `fps` is missing it is estimated from the frame
//! timestamps, falling back to 30 when those are unusable.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use liftform_core::{Joint, Point2, PoseFrame, PoseSeries};
use serde::Deserialize;

use crate::error::{SessionError, SessionResult};

/// Capture rate assumed when neither the document nor its timestamps
/// provide one.
pub const DEFAULT_FPS: f64 = 30.0;

#[derive(Debug, Deserialize)]
struct SampleDocument {
    #[serde(default)]
    fps: Option<f64>,
    frames: Vec<SampleFrame>,
}

#[derive(Debug, Deserialize)]
struct SampleFrame {
    t: f64,
    #[serde(default)]
    points: HashMap<String, Vec<f64>>,
}

/// Decode a JSON sample document into a pose series.
///
/// # Errors
///
/// Returns [`SessionError::Decode`] for malformed JSON and
/// [`SessionError::InvalidSample`] when the decoded document declares
/// an unusable capture rate.
pub fn series_from_json(json: &str) -> SessionResult<PoseSeries> {
    let doc: SampleDocument = serde_json::from_str(json)?;

    let mut frames = Vec::with_capacity(doc.frames.len());
    for (index, sample) in doc.frames.iter().enumerate() {
        let mut frame = PoseFrame::new(index, sample.t);
        for (name, coords) in &sample.points {
            if let (Some(joint), [x, y, ..]) = (Joint::from_name(name), coords.as_slice()) {
                frame.set_joint(joint, Point2::new(*x, *y));
            }
        }
        frames.push(frame);
    }

    let fps = doc
        .fps
        .or_else(|| fps_from_timestamps(&doc.frames))
        .unwrap_or(DEFAULT_FPS);

    PoseSeries::new(fps, frames).map_err(|err| SessionError::InvalidSample(err.to_string()))
}

/// Read and decode a JSON sample file.
///
/// # Errors
///
/// Returns [`SessionError::Io`] when the file cannot be read, plus the
/// decode errors of [`series_from_json`].
pub fn series_from_file(path: impl AsRef<Path>) -> SessionResult<PoseSeries> {
    let json = fs::read_to_string(path)?;
    series_from_json(&json)
}

/// Capture rate from the mean of the positive timestamp deltas.
#[allow(clippy::cast_precision_loss)]
fn fps_from_timestamps(frames: &[SampleFrame]) -> Option<f64> {
    let deltas: Vec<f64> = frames
        .windows(2)
        .map(|pair| pair[1].t - pair[0].t)
        .filter(|delta| *delta > 0.0)
        .collect();
    if deltas.is_empty() {
        return None;
    }
    let mean_delta = deltas.iter().sum::<f64>() / deltas.len() as f64;
    Some(1.0 / mean_delta)
}
