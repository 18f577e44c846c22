//! Exact checks on vertex lists: area, containment, convexity.
//!
//! These are the predicates the hull contract is stated in, used by the test
//! suites and by `cli hull --verify`.

use crate::point::{cross, orientation, Orientation, Point};

/// Twice the signed (shoelace) area. Positive for counter-clockwise order.
pub fn signed_area2(poly: &[Point]) -> i128 {
    if poly.len() < 3 {
        return 0;
    }
    let origin = poly[0];
    poly.windows(2)
        .skip(1)
        .map(|w| cross(origin, w[0], w[1]))
        .sum()
}

/// `p` lies inside or on the boundary of the convex CCW polygon `poly`.
///
/// Degenerate polygons contain exactly their point set: nothing for an empty
/// list, the vertex for one point, the closed segment for two.
pub fn contains(poly: &[Point], p: Point) -> bool {
    match poly {
        [] => false,
        [a] => *a == p,
        [a, b] => on_segment(*a, *b, p),
        _ => (0..poly.len()).all(|i| {
            let a = poly[i];
            let b = poly[(i + 1) % poly.len()];
            cross(a, b, p) >= 0
        }),
    }
}

/// Every consecutive triple (cyclically) makes a strict left turn.
pub fn is_convex_ccw(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| orientation(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]).is_ccw())
}

/// `a` and `b` list the same cycle, possibly starting at different vertices.
pub fn same_cyclic_sequence(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    b.iter()
        .enumerate()
        .filter(|(_, q)| **q == a[0])
        .any(|(shift, _)| (0..a.len()).all(|i| a[i] == b[(i + shift) % b.len()]))
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orientation(a, b, p) == Orientation::Collinear
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
