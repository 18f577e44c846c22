//! Curated internal API for the CLI and experiments (UNSTABLE).
//!
//! Important
//! - This is not a public API. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across callers.

// Primitives
pub use crate::point::{cross, distance, distance_squared, orientation, Orientation, Point};
// Strategies
pub use crate::algo::{graham_scan, jarvis_march, monotone_chain, quick_hull, Algorithm};
// Checks
pub use crate::polygon::{contains, is_convex_ccw, same_cyclic_sequence, signed_area2};
// Random inputs
pub use crate::rand::{
    draw_general_position, draw_points, in_general_position, PointsCfg, ReplayToken,
};

/// Hull of `points` with a check of the result attached.
///
/// Pre: none; any point list is accepted.
/// Post: `hull` is `algo.hull(points)`; `verified` is true iff every input point
/// lies in the hull and, for three or more vertices, the hull is strictly convex CCW.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedHull {
    pub hull: Vec<Point>,
    pub verified: bool,
}

pub fn checked_hull(algo: Algorithm, points: &[Point]) -> CheckedHull {
    let hull = algo.hull(points);
    let verified = if points.len() < 3 {
        hull == points
    } else {
        points.iter().all(|p| contains(&hull, *p)) && (hull.len() < 3 || is_convex_ccw(&hull))
    };
    CheckedHull { hull, verified }
}
