//! Vector and scalar helpers for the analysis pipeline.
//!
//! Angle helpers clamp both the magnitude denominator and the cosine, so
//! degenerate inputs (coincident joints, zero-length segments) produce a
//! finite angle instead of NaN.

use crate::types::Point2;

/// Floor applied to magnitude products before division.
const MIN_MAGNITUDE: f64 = 1e-4;

/// Interior angle at vertex `b` of the triangle `a`-`b`-`c`, in degrees.
///
/// Always finite and within [0, 180], even when two of the points coincide.
#[must_use]
pub fn angle_degrees(a: Point2, b: Point2, c: Point2) -> f64 {
    let (v1x, v1y) = (a.x - b.x, a.y - b.y);
    let (v2x, v2y) = (c.x - b.x, c.y - b.y);

    let dot = v1x.mul_add(v2x, v1y * v2y);
    let magnitudes = v1x.hypot(v1y) * v2x.hypot(v2y);
    let cosine = (dot / magnitudes.max(MIN_MAGNITUDE)).clamp(-1.0, 1.0);

    cosine.acos().to_degrees()
}

/// Angle between the vector `a -> b` and the upward vertical, in degrees.
///
/// y grows upward, so a vector pointing straight up reads 0 and one
/// pointing straight down reads 180.
#[must_use]
pub fn angle_from_vertical_degrees(a: Point2, b: Point2) -> f64 {
    let (vx, vy) = (b.x - a.x, b.y - a.y);

    // The vertical reference is the unit vector (0, 1), so the dot
    // product reduces to the y component.
    let magnitude = vx.hypot(vy);
    let cosine = (vy / magnitude.max(MIN_MAGNITUDE)).clamp(-1.0, 1.0);

    cosine.acos().to_degrees()
}

/// Centered moving average whose window clamps at the sequence ends.
///
/// Windows of one or less, and inputs shorter than two samples, are
/// returned unchanged.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 || values.len() <= 1 {
        return values.to_vec();
    }

    let half = window / 2;
    let last = values.len() - 1;

    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(last);
            let slice = &values[start..=end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Arithmetic mean; 0 for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_right_angle() {
        let a = Point2::new(0.0, 1.0);
        let b = Point2::new(0.0, 0.0);
        let c = Point2::new(1.0, 0.0);
        assert_abs_diff_eq!(angle_degrees(a, b, c), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_straight_line_is_180() {
        let a = Point2::new(-1.0, 0.0);
        let b = Point2::new(0.0, 0.0);
        let c = Point2::new(1.0, 0.0);
        assert_abs_diff_eq!(angle_degrees(a, b, c), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coincident_points_stay_finite() {
        let p = Point2::new(0.3, 0.7);
        let angle = angle_degrees(p, p, p);
        assert!(angle.is_finite());
        assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn test_vertical_angle_reference_is_up() {
        let origin = Point2::new(0.5, 0.5);
        let up = Point2::new(0.5, 0.9);
        let down = Point2::new(0.5, 0.1);
        let right = Point2::new(0.9, 0.5);

        assert_abs_diff_eq!(angle_from_vertical_degrees(origin, up), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            angle_from_vertical_degrees(origin, down),
            180.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            angle_from_vertical_degrees(origin, right),
            90.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_moving_average_small_inputs_unchanged() {
        let values = [3.0, 7.0];
        assert_eq!(moving_average(&values, 1), values.to_vec());
        assert_eq!(moving_average(&[5.0], 5), vec![5.0]);
    }

    #[test]
    fn test_moving_average_flattens_spike() {
        let values = [1.0, 1.0, 10.0, 1.0, 1.0];
        let smoothed = moving_average(&values, 3);
        // Middle value becomes the average of 1, 10, 1
        assert_abs_diff_eq!(smoothed[2], 4.0, epsilon = 1e-10);
        assert!(smoothed[2] < values[2]);
    }

    #[test]
    fn test_moving_average_window_clamps_at_edges() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let smoothed = moving_average(&values, 5);
        // First output averages only the three reachable samples
        assert_abs_diff_eq!(smoothed[0], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(smoothed[2], 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(smoothed[4], 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_abs_diff_eq!(mean(&[2.0, 4.0]), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_std_deviation_degenerate_inputs() {
        assert_eq!(std_deviation(&[]), 0.0);
        assert_eq!(std_deviation(&[42.0]), 0.0);
    }

    #[test]
    fn test_std_deviation_known_value() {
        // Population standard deviation of this classic set is exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(std_deviation(&values), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_std_deviation_shift_invariant() {
        let values = [0.1, 0.4, 0.2, 0.9, 0.6];
        let shifted: Vec<f64> = values.iter().map(|v| v + 100.0).collect();
        assert_abs_diff_eq!(
            std_deviation(&values),
            std_deviation(&shifted),
            epsilon = 1e-9
        );
    }
}
