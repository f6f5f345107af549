//! Repetition boundary detection from a primary-joint trajectory.
//!
//! Works on the vertical trajectory of a single joint (hip for squat
//! and deadlift, wrist for bench):
//!
//! 1. Extract the primary joint's height for every frame.
//! 2. Smooth with a centered moving average, window 5.
//! 3. Find strict local maxima and minima of the smoothed signal.
//! 4. Debounce each kind so only one dominant extremum survives per
//!    window of `max(6, round(0.6 * fps))` frames.
//! 5. Pair adjacent maxima and pick the lowest minimum strictly
//!    between them as the rep bottom.
//!
//! Series shorter than four frames, or with the primary joint missing
//! on any frame, yield no segments rather than an error. Callers treat
//! an empty result as "no complete repetition detected yet".

use liftform_core::geometry::moving_average;
use liftform_core::{LiftType, PoseSeries};

use crate::types::RepSegment;

/// Moving-average window applied to the raw trajectory.
const SMOOTHING_WINDOW: usize = 5;

/// Lower bound on the extremum separation, in frames.
const MIN_GAP_FLOOR: usize = 6;

/// Extremum separation as a fraction of a second.
const MIN_GAP_SECS: f64 = 0.6;

/// Minimum frame distance enforced between extrema of the same kind.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn min_gap_frames(fps: f64) -> usize {
    MIN_GAP_FLOOR.max((MIN_GAP_SECS * fps).round() as usize)
}

/// Split a pose series into repetition segments, chronologically ordered.
///
/// Every returned segment satisfies `start < bottom < end` within the
/// series bounds.
#[must_use]
pub fn segment_reps(series: &PoseSeries, lift: LiftType) -> Vec<RepSegment> {
    if series.len() <= 3 {
        return Vec::new();
    }

    let joint = lift.primary_joint();
    let mut heights = Vec::with_capacity(series.len());
    for frame in &series.frames {
        match frame.joint(joint) {
            Some(point) => heights.push(point.y),
            None => return Vec::new(),
        }
    }

    let smoothed = moving_average(&heights, SMOOTHING_WINDOW);
    let min_gap = min_gap_frames(series.fps);

    let maxima = debounce(&local_maxima(&smoothed), &smoothed, min_gap, true);
    let minima = debounce(&local_minima(&smoothed), &smoothed, min_gap, false);
    if maxima.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    for pair in maxima.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if end - start < min_gap {
            continue;
        }

        // Deepest debounced minimum strictly inside the pair
        let bottom = minima
            .iter()
            .copied()
            .filter(|&m| m > start && m < end)
            .min_by(|&a, &b| smoothed[a].total_cmp(&smoothed[b]));

        if let Some(bottom) = bottom {
            segments.push(RepSegment { start, bottom, end });
        }
    }
    segments
}

/// Indices whose value is strictly greater than both neighbors.
fn local_maxima(values: &[f64]) -> Vec<usize> {
    (1..values.len().saturating_sub(1))
        .filter(|&i| values[i] > values[i - 1] && values[i] > values[i + 1])
        .collect()
}

/// Indices whose value is strictly less than both neighbors.
fn local_minima(values: &[f64]) -> Vec<usize> {
    (1..values.len().saturating_sub(1))
        .filter(|&i| values[i] < values[i - 1] && values[i] < values[i + 1])
        .collect()
}

/// Collapse candidates closer than `min_gap` to their dominant pick.
///
/// Candidates must be in ascending index order. A candidate within
/// `min_gap` of the last accepted one replaces it only when strictly
/// better (higher for maxima, lower for minima); otherwise it is
/// dropped.
fn debounce(
    candidates: &[usize],
    values: &[f64],
    min_gap: usize,
    prefer_higher: bool,
) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::new();
    for &idx in candidates {
        match kept.last_mut() {
            Some(last) if idx - *last < min_gap => {
                let better = if prefer_higher {
                    values[idx] > values[*last]
                } else {
                    values[idx] < values[*last]
                };
                if better {
                    *last = idx;
                }
            }
            _ => kept.push(idx),
        }
    }
    kept
}
