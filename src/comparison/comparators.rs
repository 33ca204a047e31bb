//! Threshold-aware winner selection shared by every compared field.
//!
//! An absent value can never win. When only one side has a value, that side
//! wins outright; when neither does, the field is a tie.

use super::types::Winner;

/// Slack for binary rounding, so `4.2` vs `4.1` counts as a 0.1 difference.
const FLOAT_TOLERANCE: f64 = 1e-9;

pub fn compare_higher_is_better(a: Option<f64>, b: Option<f64>, threshold: f64) -> Winner {
    match (a, b) {
        (None, None) => Winner::Tie,
        (Some(_), None) => Winner::A,
        (None, Some(_)) => Winner::B,
        (Some(a), Some(b)) => {
            if within_threshold(a, b, threshold) {
                Winner::Tie
            } else if a > b {
                Winner::A
            } else {
                Winner::B
            }
        }
    }
}

pub fn compare_lower_is_better(a: Option<f64>, b: Option<f64>, threshold: f64) -> Winner {
    match (a, b) {
        (None, None) => Winner::Tie,
        (Some(_), None) => Winner::A,
        (None, Some(_)) => Winner::B,
        (Some(a), Some(b)) => {
            if within_threshold(a, b, threshold) {
                Winner::Tie
            } else if a < b {
                Winner::A
            } else {
                Winner::B
            }
        }
    }
}

/// Count comparison: the difference has to exceed `threshold` to count.
pub fn compare_counts(a: u64, b: u64, threshold: u64) -> Winner {
    compare_higher_is_better(Some(a as f64), Some(b as f64), threshold as f64)
}

fn within_threshold(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() <= threshold.max(0.0) + FLOAT_TOLERANCE
}
