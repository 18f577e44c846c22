//! Integer points and the exact predicates every hull algorithm builds on.
//!
//! - `cross`: doubled signed area of the triangle `(o, a, b)`.
//! - `orientation`: its sign, as a turn direction.
//! - `distance_squared` / `distance`: tie-breaks between collinear candidates.
//!
//! Coordinates are `i32`. Differences of two coordinates need 33 bits and the
//! product of two differences needs 66, so everything is widened to `i128`
//! before subtracting. Overflow is impossible for any `i32` input.

use std::cmp::Ordering;
use std::fmt;

/// A point with integer coordinates. Ordered lexicographically by `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn direction of the path `o → a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn.
    CounterClockwise,
    /// Right turn.
    Clockwise,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
}

/// Doubled signed area of triangle `(o, a, b)`:
/// `(a.x−o.x)(b.y−o.y) − (a.y−o.y)(b.x−o.x)`.
///
/// Positive for a left turn at `a`, negative for a right turn, zero when the
/// three points are collinear (including coincident points).
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ox, oy) = (i128::from(o.x), i128::from(o.y));
    let (ax, ay) = (i128::from(a.x) - ox, i128::from(a.y) - oy);
    let (bx, by) = (i128::from(b.x) - ox, i128::from(b.y) - oy);
    ax * by - ay * bx
}

/// Sign of [`cross`] as a turn direction.
#[inline]
pub fn orientation(o: Point, a: Point, b: Point) -> Orientation {
    match cross(o, a, b).cmp(&0) {
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Less => Orientation::Clockwise,
        Ordering::Equal => Orientation::Collinear,
    }
}

/// Exact squared Euclidean distance.
#[inline]
pub fn distance_squared(a: Point, b: Point) -> i128 {
    let dx = i128::from(b.x) - i128::from(a.x);
    let dy = i128::from(b.y) - i128::from(a.y);
    dx * dx + dy * dy
}

/// Euclidean distance. Only for reporting; comparisons use [`distance_squared`].
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (distance_squared(a, b) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_signs() {
        let o = Point::new(0, 0);
        let a = Point::new(4, 0);
        assert_eq!(orientation(o, a, Point::new(4, 4)), Orientation::CounterClockwise);
        assert_eq!(orientation(o, a, Point::new(4, -4)), Orientation::Clockwise);
        assert_eq!(orientation(o, a, Point::new(9, 0)), Orientation::Collinear);
        assert_eq!(orientation(o, o, a), Orientation::Collinear);
        assert_eq!(cross(o, a, Point::new(4, 4)), 16);
    }

    #[test]
    fn cross_does_not_overflow_at_extremes() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, i32::MAX);
        let corner = Point::new(i32::MAX, i32::MIN);
        let span = i128::from(i32::MAX) - i128::from(i32::MIN);
        // lo → corner → hi is a left turn spanning the whole i32 square.
        assert_eq!(cross(lo, corner, hi), span * span);
        assert_eq!(orientation(lo, corner, hi), Orientation::CounterClockwise);
        assert_eq!(orientation(lo, hi, corner), Orientation::Clockwise);
        assert_eq!(distance_squared(lo, hi), 2 * span * span);
    }

    #[test]
    fn distance_matches_squared() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 6);
        assert_eq!(distance_squared(a, b), 25);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, -1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, -1), Point::new(0, 5), Point::new(1, 0)]);
        assert_eq!(Point::from((3, -2)).to_string(), "(3, -2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape_is_xy_object() {
        let p = Point::new(3, -7);
        let s = serde_json::to_string(&p).unwrap();
        assert_eq!(s, r#"{"x":3,"y":-7}"#);
        let back: Point = serde_json::from_str(&s).unwrap();
        assert_eq!(back, p);
    }
}
