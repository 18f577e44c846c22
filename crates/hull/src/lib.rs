//! Convex hulls of integer point sets in the plane.
//!
//! Four interchangeable algorithms share one contract: a slice of points in,
//! the hull vertices out, counter-clockwise, first vertex not repeated at the
//! end. Inputs with fewer than three points are returned unchanged.
//!
//! All predicates are exact: coordinates are `i32` and every orientation test
//! is evaluated in `i128`, so there are no tolerances anywhere in this crate.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface for the CLI and experiments.

pub mod algo;
pub mod api;
pub mod point;
pub mod polygon;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algo::{graham_scan, jarvis_march, monotone_chain, quick_hull, Algorithm};
pub use point::{cross, distance, distance_squared, orientation, Orientation, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algo::{graham_scan, jarvis_march, monotone_chain, quick_hull, Algorithm};
    pub use crate::point::{orientation, Orientation, Point};
    pub use crate::polygon::{contains, is_convex_ccw, same_cyclic_sequence, signed_area2};
    pub use crate::rand::{draw_points, PointsCfg, ReplayToken};
}
