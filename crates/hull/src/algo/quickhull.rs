use crate::point::{cross, Point};

/// One pending segment: hull vertices strictly between `from` and `to` are
/// still unknown, and `candidates` (indices into the input) are exactly the
/// points strictly to the right of the directed line `from → to`.
struct Segment {
    from: Point,
    to: Point,
    candidates: Vec<usize>,
}

enum Work {
    Split(Segment),
    Emit(Point),
}

/// QuickHull with an explicit work stack instead of recursion.
///
/// Seeds are the lexicographically smallest and largest points. Points
/// strictly below the seed line feed the lower chain, points strictly above
/// feed the upper chain; points on the line are never hull vertices here.
/// Each segment is split at its farthest candidate, and only candidates
/// outside the two new edges are carried forward, so every step strictly
/// shrinks the candidate set.
///
/// Output: smallest seed, lower chain left to right, largest seed, upper
/// chain right to left. That is counter-clockwise.
pub fn quick_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let (Some(lo), Some(hi)) = (
        (0..points.len()).min_by_key(|&i| points[i]),
        (0..points.len()).max_by_key(|&i| points[i]),
    ) else {
        return points.to_vec();
    };
    let (left, right) = (points[lo], points[hi]);
    if left == right {
        return vec![left];
    }

    let (mut below, mut above) = (Vec::new(), Vec::new());
    for (i, &p) in points.iter().enumerate() {
        let c = cross(left, right, p);
        if c < 0 {
            below.push(i);
        } else if c > 0 {
            above.push(i);
        }
    }

    let mut hull = vec![left];
    let mut stack = vec![
        Work::Split(Segment {
            from: right,
            to: left,
            candidates: above,
        }),
        Work::Emit(right),
        Work::Split(Segment {
            from: left,
            to: right,
            candidates: below,
        }),
    ];
    while let Some(work) = stack.pop() {
        match work {
            Work::Emit(p) => hull.push(p),
            Work::Split(seg) => {
                let Some(far) = farthest(points, &seg) else {
                    continue;
                };
                let (before, after) = split_outside(points, &seg, far);
                // LIFO: the `from → far` side is handled first, then `far`, then `far → to`.
                stack.push(Work::Split(Segment {
                    from: far,
                    to: seg.to,
                    candidates: after,
                }));
                stack.push(Work::Emit(far));
                stack.push(Work::Split(Segment {
                    from: seg.from,
                    to: far,
                    candidates: before,
                }));
            }
        }
    }
    hull
}

/// Candidate farthest from the segment's line.
///
/// Equally far candidates lie on one line parallel to the segment; the one
/// furthest along `from → to` is an end of that run and hence a vertex. The
/// rest of the run then sits on or beyond the new edges and is resolved there.
fn farthest(points: &[Point], seg: &Segment) -> Option<Point> {
    let dx = i128::from(seg.to.x) - i128::from(seg.from.x);
    let dy = i128::from(seg.to.y) - i128::from(seg.from.y);
    let along = |p: Point| {
        (i128::from(p.x) - i128::from(seg.from.x)) * dx
            + (i128::from(p.y) - i128::from(seg.from.y)) * dy
    };
    seg.candidates
        .iter()
        .map(|&i| points[i])
        .max_by_key(|&p| (cross(seg.from, seg.to, p).abs(), along(p)))
}

/// Candidates strictly right of `from → far` and of `far → to`.
///
/// Points inside the triangle `(from, far, to)` and on its two new edges drop
/// out, as do `far` itself and its duplicates.
fn split_outside(points: &[Point], seg: &Segment, far: Point) -> (Vec<usize>, Vec<usize>) {
    let mut before = Vec::new();
    let mut after = Vec::new();
    for &i in &seg.candidates {
        let p = points[i];
        if cross(seg.from, far, p) < 0 {
            before.push(i);
        } else if cross(far, seg.to, p) < 0 {
            after.push(i);
        }
    }
    (before, after)
}
