use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};
use crate::operations::query::{CircleCircleIntersect, CircleIntersection};

use super::Side;

/// A circle in the XY plane.
///
/// `P(t) = center + radius * (cos(t), sin(t))`
///
/// A zero radius is allowed and describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2 {
    center: Point2,
    radius: f64,
}

impl Circle2 {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate or the radius is not finite, or if the
    /// radius is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        Self::labelled(center, radius, ["center.x", "center.y", "radius"])
    }

    /// Same as [`Circle2::new`], reporting failures under the given parameter
    /// names (`[x, y, radius]`).
    pub(crate) fn labelled(center: Point2, radius: f64, labels: [&'static str; 3]) -> Result<Self> {
        let [x_label, y_label, radius_label] = labels;
        for (parameter, value) in [(x_label, center.x), (y_label, center.y), (radius_label, radius)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { parameter, value }.into());
            }
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius {
                parameter: radius_label,
                value: radius,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circle at `angle` radians, measured counter-clockwise from +X.
    #[must_use]
    pub fn evaluate(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Unsigned distance from `point` to the circle's boundary.
    #[must_use]
    pub fn distance_to_boundary(&self, point: &Point2) -> f64 {
        ((*point - self.center).norm() - self.radius).abs()
    }

    /// Intersects this circle with `other` using the default tolerance.
    ///
    /// Left and right are taken relative to the line from this circle's
    /// center towards `other`'s center.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoIntersection`] if the circles do not meet.
    pub fn intersect(&self, other: &Circle2, side: Side) -> Result<CircleIntersection> {
        CircleCircleIntersect::new(*self, *other)
            .with_side(side)
            .execute()
    }
}
