/// Linear scale of `value` into [0, 1]. An empty range maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max.is_nan() || min.is_nan() || max <= min || !value.is_finite() {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Inverted linear scale: the smallest value scores highest.
/// An empty range maps to 1, since both sides are equally good.
pub fn normalize_inverted(value: f64, min: f64, max: f64) -> f64 {
    if max.is_nan() || min.is_nan() || max <= min {
        return 1.0;
    }
    1.0 - normalize(value, min, max)
}

/// Substitute for a missing lower-is-better value: strictly worse than
/// anything observed, so the missing side always scores 0.
pub fn missing_penalty(observed: &[Option<f64>]) -> f64 {
    observed
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max)
        + 1.0
}

/// Per-side normalized scores for a higher-is-better field.
pub fn scale_higher(a: f64, b: f64) -> (f64, f64) {
    let max = a.max(b);
    (normalize(a, 0.0, max), normalize(b, 0.0, max))
}

/// Per-side normalized scores for a lower-is-better field where either side
/// may be missing.
pub fn scale_lower(a: Option<f64>, b: Option<f64>) -> (f64, f64) {
    let penalty = missing_penalty(&[a, b]);
    let a = a.unwrap_or(penalty);
    let b = b.unwrap_or(penalty);
    let max = a.max(b);
    (
        normalize_inverted(a, 0.0, max),
        normalize_inverted(b, 0.0, max),
    )
}
