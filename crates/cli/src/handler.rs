//! JSON boundary: request body in, hull out.
//!
//! The body is a JSON array of `{"x": int, "y": int}` objects. Malformed data
//! is rejected here and never reaches the hull algorithms. The response is a
//! JSON array of the hull vertices; the first vertex is not repeated.

use anyhow::{Context, Result};
use hull::{Algorithm, Point};

/// Decode a request body into points.
pub fn parse_points(body: &[u8]) -> Result<Vec<Point>> {
    serde_json::from_slice(body).context("expected a JSON array of {\"x\": int, \"y\": int} objects")
}

/// Answer one request with exactly one strategy.
pub fn handle_points(algo: Algorithm, body: &[u8]) -> Result<Vec<u8>> {
    let points = parse_points(body)?;
    tracing::info!(algorithm = algo.name(), points = points.len(), "hull");
    let hull = algo.hull(&points);
    tracing::debug!(vertices = hull.len(), "hull done");
    Ok(serde_json::to_vec(&hull)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_request_round_trip() {
        let body = br#"[{"x":0,"y":0},{"x":4,"y":0},{"x":4,"y":4},{"x":0,"y":4},{"x":2,"y":2}]"#;
        for algo in Algorithm::ALL {
            let out = handle_points(algo, body).unwrap();
            let hull: Vec<Point> = serde_json::from_slice(&out).unwrap();
            assert_eq!(
                hull,
                vec![
                    Point::new(0, 0),
                    Point::new(4, 0),
                    Point::new(4, 4),
                    Point::new(0, 4)
                ],
                "{algo}"
            );
        }
    }

    #[test]
    fn degenerate_request_echoes_input() {
        let out = handle_points(Algorithm::QuickHull, br#"[{"x":1,"y":1},{"x":0,"y":0}]"#).unwrap();
        assert_eq!(out, br#"[{"x":1,"y":1},{"x":0,"y":0}]"#.to_vec());
        assert_eq!(handle_points(Algorithm::GrahamScan, b"[]").unwrap(), b"[]".to_vec());
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(handle_points(Algorithm::GrahamScan, b"{}").is_err());
        assert!(handle_points(Algorithm::GrahamScan, br#"[{"x":1.5,"y":0}]"#).is_err());
        assert!(handle_points(Algorithm::GrahamScan, br#"[{"x":1}]"#).is_err());
        assert!(parse_points(br#"[{"x":3000000000,"y":0}]"#).is_err());
    }
}
