//! Random integer point sets (uniform in a box + replay tokens).
//!
//! Purpose
//! - Small, deterministic sampler for hull inputs: tests, benchmarks, and
//!   `cli random`. Defaults match the demo page: 10 points in `[0, 100)²`.
//!
//! Model
//! - `count` points drawn uniformly from `[0, max_coord)²`. Duplicates and
//!   collinear triples are allowed and become likely for small boxes.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{orientation, Orientation, Point};

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointsCfg {
    pub count: usize,
    /// Exclusive upper bound for both coordinates. Values below 1 are treated as 1.
    pub max_coord: i32,
}

impl Default for PointsCfg {
    fn default() -> Self {
        Self {
            count: 10,
            max_coord: 100,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from `[0, max_coord)²`.
pub fn draw_points(cfg: PointsCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let hi = cfg.max_coord.max(1);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(0..hi), rng.gen_range(0..hi)))
        .collect()
}

/// Draw points until the set is in general position (no duplicates, no
/// collinear triple), advancing the token index on every retry.
///
/// Returns the accepted set and the token that produced it, or `None` after
/// `max_attempts` rejections. Cubic in `count`; meant for small sets.
pub fn draw_general_position(
    cfg: PointsCfg,
    tok: ReplayToken,
    max_attempts: usize,
) -> Option<(Vec<Point>, ReplayToken)> {
    let mut tok = tok;
    for _ in 0..max_attempts {
        let pts = draw_points(cfg, tok);
        if in_general_position(&pts) {
            return Some((pts, tok));
        }
        tok = tok.next();
    }
    None
}

/// No two points coincide and no three are collinear.
pub fn in_general_position(points: &[Point]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if points[i] == points[j] {
                return false;
            }
            for k in (j + 1)..n {
                if orientation(points[i], points[j], points[k]) == Orientation::Collinear {
                    return false;
                }
            }
        }
    }
    true
}
