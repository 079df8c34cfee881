use std::iter;

use tracing::{debug, trace};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Circle2, Side};
use crate::math::{
    max_magnitude, perp_ccw, scaled_tolerance, Point2, Vector2, EPSILON, TOLERANCE_FACTOR,
};

/// How the returned points were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    /// The circles coincide; the point is an arbitrary representative.
    Coincident,
    /// One circle has zero radius and lies on the other's boundary.
    Degenerate,
    /// Two crossing points, or one touching point when tangent.
    Regular,
}

/// Result of a circle-circle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleIntersection {
    first: Point2,
    second: Option<Point2>,
    kind: IntersectionKind,
}

impl CircleIntersection {
    fn duplicated(point: Point2, kind: IntersectionKind) -> Self {
        Self {
            first: point,
            second: Some(point),
            kind,
        }
    }

    /// The left point for [`Side::Both`] and [`Side::Left`], the right point
    /// for [`Side::Right`].
    #[must_use]
    pub fn first(&self) -> &Point2 {
        &self.first
    }

    /// The right point for [`Side::Both`], `None` when a single side was requested.
    #[must_use]
    pub fn second(&self) -> Option<&Point2> {
        self.second.as_ref()
    }

    /// Which case produced the points.
    #[must_use]
    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    /// Iterates over the points that are present.
    pub fn points(&self) -> impl Iterator<Item = &Point2> {
        iter::once(&self.first).chain(self.second.as_ref())
    }

    /// Consumes the result, returning `(first, second)`.
    #[must_use]
    pub fn into_pair(self) -> (Point2, Option<Point2>) {
        (self.first, self.second)
    }
}

/// Intersects two circles.
///
/// The numerical tolerance is scaled to the largest magnitude among the
/// centers' coordinates and the radii, so that circles far from the origin
/// are judged as accurately as small ones.
#[derive(Debug, Clone, Copy)]
pub struct CircleCircleIntersect {
    a: Circle2,
    b: Circle2,
    side: Side,
    tolerance_factor: f64,
}

impl CircleCircleIntersect {
    /// Creates a new `CircleCircleIntersect` returning both points.
    #[must_use]
    pub fn new(a: Circle2, b: Circle2) -> Self {
        Self {
            a,
            b,
            side: Side::Both,
            tolerance_factor: TOLERANCE_FACTOR,
        }
    }

    /// Selects which point(s) to return.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Overrides the multiplier applied to machine epsilon (default [`TOLERANCE_FACTOR`]).
    #[must_use]
    pub fn with_tolerance_factor(mut self, factor: f64) -> Self {
        self.tolerance_factor = factor;
        self
    }

    /// Executes the intersection.
    ///
    /// Coincident circles and zero-radius circles lying on the other circle
    /// always yield a single point repeated in both slots, whatever the side.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoIntersection`] if the circles are too far
    /// apart or one strictly contains the other, and
    /// [`OperationError::InvalidTolerance`] if the tolerance factor is not
    /// finite and positive.
    pub fn execute(&self) -> Result<CircleIntersection> {
        if !(self.tolerance_factor.is_finite() && self.tolerance_factor > 0.0) {
            return Err(OperationError::InvalidTolerance(self.tolerance_factor).into());
        }

        let c1 = *self.a.center();
        let c2 = *self.b.center();
        let r1 = self.a.radius();
        let r2 = self.b.radius();

        let max_mag = max_magnitude([r1, r2, c1.x, c1.y, c2.x, c2.y]);
        let tolerance = scaled_tolerance(self.tolerance_factor, max_mag);
        trace!(tolerance, max_mag, "derived intersection tolerance");

        let base_line = c2 - c1;
        let distance = base_line.norm();

        // Infinitely many solutions.
        if distance < EPSILON && (r1 - r2).abs() < tolerance {
            debug!(r1, "circles coincide");
            return Ok(CircleIntersection::duplicated(
                c1 + Vector2::new(r1, 0.0),
                IntersectionKind::Coincident,
            ));
        }

        let base_line = base_line / distance;
        let base_line_perp = perp_ccw(&base_line);

        if r1 < tolerance && (distance - r2).abs() < tolerance {
            debug!("first circle is a point on the second");
            return Ok(CircleIntersection::duplicated(c1, IntersectionKind::Degenerate));
        }
        if r2 < tolerance && (distance - r1).abs() < tolerance {
            debug!("second circle is a point on the first");
            return Ok(CircleIntersection::duplicated(c2, IntersectionKind::Degenerate));
        }

        if distance > r1 + r2 || r1 > distance + r2 || r2 > distance + r1 {
            debug!(distance, r1, r2, "triangle inequality fails");
            return Err(GeometryError::NoIntersection { distance, r1, r2 }.into());
        }

        // Law of cosines at c1. Near tangency rounding can leave |cos| just above 1.
        let cos_theta = ((distance * distance + r1 * r1 - r2 * r2) / (2.0 * distance * r1))
            .clamp(-1.0, 1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let along = c1 + base_line * (r1 * cos_theta);
        let across = base_line_perp * (r1 * sin_theta);
        let left = along + across;
        let right = along - across;

        let (first, second) = match self.side {
            Side::Both => (left, Some(right)),
            Side::Left => (left, None),
            Side::Right => (right, None),
        };
        Ok(CircleIntersection {
            first,
            second,
            kind: IntersectionKind::Regular,
        })
    }
}

/// Intersects the circle `(c1, r1)` with the circle `(c2, r2)`.
///
/// Left and right are relative to the directed line from `c1` to `c2`.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] or [`GeometryError::NegativeRadius`]
/// for invalid inputs, and [`GeometryError::NoIntersection`] if the circles
/// do not meet.
pub fn intersect(c1: Point2, r1: f64, c2: Point2, r2: f64, side: Side) -> Result<CircleIntersection> {
    let a = Circle2::labelled(c1, r1, ["c1.x", "c1.y", "r1"])?;
    let b = Circle2::labelled(c2, r2, ["c2.x", "c2.y", "r2"])?;
    CircleCircleIntersect::new(a, b).with_side(side).execute()
}
