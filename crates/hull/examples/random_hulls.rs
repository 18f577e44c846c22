//! Print hulls of a few random point sets, one line per strategy.
//!
//! Usage:
//!   cargo run -p hull --example random_hulls
//!   cargo run -p hull --example random_hulls -- 25
//!
//! The optional argument is the number of points per set (default 10).

use hull::polygon::same_cyclic_sequence;
use hull::rand::{draw_points, PointsCfg, ReplayToken};
use hull::Algorithm;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let cfg = PointsCfg {
        count,
        ..PointsCfg::default()
    };
    let mut tok = ReplayToken { seed: 2025, index: 0 };
    for i in 0..3 {
        let pts = draw_points(cfg, tok);
        println!("sample {i}: n={}", pts.len());
        let reference = Algorithm::MonotoneChain.hull(&pts);
        for algo in Algorithm::ALL {
            let h = algo.hull(&pts);
            let verts: Vec<String> = h.iter().map(|p| p.to_string()).collect();
            println!(
                "  {:<14} h={:<3} agrees={} {}",
                algo.name(),
                h.len(),
                same_cyclic_sequence(&reference, &h),
                verts.join(" ")
            );
        }
        tok = tok.next();
    }
}
