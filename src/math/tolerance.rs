/// Machine epsilon of the scalar type used throughout the crate.
pub const EPSILON: f64 = f64::EPSILON;

/// Default multiplier applied to [`EPSILON`] when deriving a problem tolerance.
pub const TOLERANCE_FACTOR: f64 = 100.0;

/// Largest absolute value among `values`, or `0.0` when empty.
#[must_use]
pub fn max_magnitude<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc.max(v.abs()))
}

/// Tolerance scaled to the magnitude of a problem.
///
/// `factor * (max_magnitude + 1) * EPSILON`. The `+ 1` keeps the tolerance
/// meaningful when every input is close to zero.
#[must_use]
pub fn scaled_tolerance(factor: f64, max_magnitude: f64) -> f64 {
    factor * (max_magnitude + 1.0) * EPSILON
}
