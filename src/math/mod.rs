mod tolerance;

pub use tolerance::{max_magnitude, scaled_tolerance, EPSILON, TOLERANCE_FACTOR};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Rotates `v` by 90 degrees counter-clockwise.
#[must_use]
pub fn perp_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}
