mod intersect;

pub use intersect::{intersect, CircleCircleIntersect, CircleIntersection, IntersectionKind};
