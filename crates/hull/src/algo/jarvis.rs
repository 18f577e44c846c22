use crate::point::{distance_squared, orientation, Orientation, Point};

/// Jarvis march (gift wrapping), `O(n·h)`.
///
/// Starts at the lexicographically smallest point, which is always a hull
/// vertex. From each vertex it picks the candidate with no other point
/// strictly to its right, which walks the boundary counter-clockwise.
/// Among collinear candidates the farthest wins, so points in the interior
/// of a hull edge are skipped.
///
/// The walk ends when it returns to the start vertex (by value). It is also
/// bounded by the input length, which a hull can never exceed.
pub fn jarvis_march(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let Some(&start) = points.iter().min() else {
        return points.to_vec();
    };

    let mut hull = Vec::new();
    let mut current = start;
    for _ in 0..points.len() {
        hull.push(current);
        let Some(next) = next_vertex(points, current) else {
            // Every point coincides with `current`.
            break;
        };
        if next == start {
            break;
        }
        current = next;
    }
    hull
}

/// The most clockwise point as seen from `current`; farthest on ties.
fn next_vertex(points: &[Point], current: Point) -> Option<Point> {
    let mut next: Option<Point> = None;
    for &p in points {
        if p == current {
            continue;
        }
        let Some(candidate) = next else {
            next = Some(p);
            continue;
        };
        let replace = match orientation(current, candidate, p) {
            Orientation::Clockwise => true,
            Orientation::Collinear => {
                distance_squared(current, p) > distance_squared(current, candidate)
            }
            Orientation::CounterClockwise => false,
        };
        if replace {
            next = Some(p);
        }
    }
    next
}
