use std::cmp::Ordering;

use crate::point::{distance_squared, orientation, Orientation, Point};

/// Graham scan: angular sort around the lowest point, then a stack scan.
///
/// The pivot is the point with minimum `y` (ties: minimum `x`). Since every
/// other point lies in the closed upper half-plane of the pivot and nothing
/// lies to its left on the same row, comparing two points by the orientation
/// they form with the pivot is a total order by polar angle. Equal angles
/// are ordered nearer-first so the scan discards the nearer point.
///
/// The scan pops on right turns and on exact collinearity, so collinear
/// boundary points are never kept. Output starts at the pivot.
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let Some(&pivot) = points.iter().min_by_key(|p| (p.y, p.x)) else {
        return points.to_vec();
    };

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| polar_cmp(pivot, *a, *b));
    // Equal points compare Equal, so they are adjacent after sorting.
    sorted.dedup();

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in sorted {
        while stack.len() >= 2
            && !orientation(stack[stack.len() - 2], stack[stack.len() - 1], p).is_ccw()
        {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

/// Polar-angle order around `pivot`; the pivot itself sorts first.
fn polar_cmp(pivot: Point, a: Point, b: Point) -> Ordering {
    match (a == pivot, b == pivot) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    match orientation(pivot, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => {
            distance_squared(pivot, a).cmp(&distance_squared(pivot, b))
        }
    }
}
