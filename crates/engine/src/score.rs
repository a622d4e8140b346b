//! Score bounds and the numeric helpers shared by the simulator.
//!
//! Scores travel through the simulator as `f64` so that any JSON number a
//! client sends can be used as-is. They only become integers at the very end,
//! once the projected score has been clamped.

/// Lowest score the simulator will ever project.
pub const MIN_SCORE: i64 = 300;

/// Highest score the simulator will ever project.
pub const MAX_SCORE: i64 = 850;

/// Score used when the caller does not provide a usable one.
pub const DEFAULT_SCORE: i64 = 700;

/// Resolve the starting score.
///
/// A missing score, `0` and `NaN` all fall back to [`DEFAULT_SCORE`]. Any other
/// value, including out-of-range ones, is used unchanged.
#[must_use]
pub fn base_score(current_score: Option<f64>) -> f64 {
    match current_score {
        Some(score) if score != 0.0 && !score.is_nan() => score,
        _ => DEFAULT_SCORE as f64,
    }
}

/// Round to the nearest integer, halves going towards positive infinity.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`, unlike [`f64::round`].
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp a projected score into `[MIN_SCORE, MAX_SCORE]` and make it whole.
#[must_use]
pub fn clamp_score(score: f64) -> i64 {
    let clamped = score.clamp(MIN_SCORE as f64, MAX_SCORE as f64);
    round_half_up(clamped) as i64
}
