use crate::point::{orientation, Point};

/// Andrew’s monotone chain (returns hull in CCW order).
///
/// Sort by `(x, y)`, drop exact duplicates, then build the lower chain left to
/// right and the upper chain right to left, popping whenever the last two
/// chain points and the candidate do not make a strict left turn. Each chain
/// ends on the other's first point, so both drop their last point before
/// being joined. Output starts at the lexicographically smallest point.
pub fn monotone_chain(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        push_convex(&mut lower, p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        push_convex(&mut upper, p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

#[inline]
fn push_convex(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2 && !orientation(chain[chain.len() - 2], chain[chain.len() - 1], p).is_ccw()
    {
        chain.pop();
    }
    chain.push(p);
}
