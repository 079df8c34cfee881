//! Intersection points of two circles in the plane.
//!
//! ```
//! use circint::{intersect, math::Point2, Side};
//!
//! let hit = intersect(Point2::origin(), 2.0, Point2::new(5.0, 0.0), 3.0, Side::Both)?;
//! assert!((*hit.first() - Point2::new(2.0, 0.0)).norm() < 1e-12);
//! # Ok::<(), circint::CircintError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CircintError, Result};
pub use geometry::{Circle2, Side};
pub use operations::query::{intersect, CircleCircleIntersect, CircleIntersection, IntersectionKind};
