//! The four hull algorithms and the strategy enum that selects between them.
//!
//! Contract (shared)
//! - Input: any slice of points; duplicates and collinear runs are allowed.
//! - Output: hull vertices in counter-clockwise order, a subset of the input
//!   by value, no coordinate pair repeated, first vertex not repeated at the end.
//! - Fewer than three input points: the input is returned unchanged.
//! - All points collinear: the two extreme points. All points identical: one point.
//!
//! The algorithms differ in where the output starts (Graham Scan at the
//! lowest point, the others at the lexicographically smallest one) and in how
//! they handle ties internally. On inputs in general position they return the
//! same cyclic sequence.

mod graham;
mod jarvis;
mod monotone;
mod quickhull;

pub use graham::graham_scan;
pub use jarvis::jarvis_march;
pub use monotone::monotone_chain;
pub use quickhull::quick_hull;

use std::fmt;

use crate::point::Point;

/// Hull strategy. Each variant implements the same contract as [`graham_scan`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    GrahamScan,
    JarvisMarch,
    QuickHull,
    MonotoneChain,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GrahamScan,
        Algorithm::JarvisMarch,
        Algorithm::QuickHull,
        Algorithm::MonotoneChain,
    ];

    /// Compute the hull of `points` with this strategy.
    #[inline]
    pub fn hull(self, points: &[Point]) -> Vec<Point> {
        match self {
            Algorithm::GrahamScan => graham_scan(points),
            Algorithm::JarvisMarch => jarvis_march(points),
            Algorithm::QuickHull => quick_hull(points),
            Algorithm::MonotoneChain => monotone_chain(points),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::GrahamScan => "Graham Scan",
            Algorithm::JarvisMarch => "Jarvis March",
            Algorithm::QuickHull => "Quickhull",
            Algorithm::MonotoneChain => "Monotone Chain",
        }
    }

    /// Short lowercase token, used on the command line and as a JSON key.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::GrahamScan => "graham",
            Algorithm::JarvisMarch => "jarvis",
            Algorithm::QuickHull => "quickhull",
            Algorithm::MonotoneChain => "monotone",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.slug() == slug)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
