//! SVG figure of an input point set and its hull.
//!
//! The hull polygon is closed here, at the rendering layer; hull outputs never
//! repeat their first vertex. SVG's y axis points down, so y is negated.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hull::Point;

struct SvgBuilder {
    content: String,
    stroke_w: f64,
    point_radius: f64,
}

impl SvgBuilder {
    /// Header, style, and background for a view of `[min, max]` (in point coordinates).
    fn new(min: (f64, f64), max: (f64, f64), pixel_size: u32) -> Self {
        let span = (max.0 - min.0).max(max.1 - min.1).max(1.0);
        let margin = span * 0.05;
        let vb_x = min.0 - margin;
        let vb_y = -max.1 - margin;
        let vb_w = max.0 - min.0 + 2.0 * margin;
        let vb_h = max.1 - min.1 + 2.0 * margin;
        let stroke_w = span * 0.004;
        let point_radius = span * 0.008;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{pixel_size}" height="{pixel_size}" viewBox="{vb_x:.3} {vb_y:.3} {vb_w:.3} {vb_h:.3}" xmlns="http://www.w3.org/2000/svg">
  <style>
    .background {{ fill: #ffffff; }}
    .input-point {{ fill: rgba(52, 152, 219, 0.8); }}
    .hull {{ fill: rgba(231, 76, 60, 0.08); stroke: rgba(231, 76, 60, 1); stroke-width: {stroke_w:.3}; }}
    .hull-vertex {{ fill: rgba(231, 76, 60, 0.8); }}
  </style>
  <rect x="{vb_x:.3}" y="{vb_y:.3}" width="{vb_w:.3}" height="{vb_h:.3}" class="background" />
"#
        );
        Self {
            content,
            stroke_w,
            point_radius,
        }
    }

    fn draw_polygon(&mut self, vertices: &[Point], class: &str) {
        let points_str: Vec<String> = vertices
            .iter()
            .map(|p| format!("{},{}", p.x, -i64::from(p.y)))
            .collect();
        let _ = writeln!(
            self.content,
            r#"  <polygon points="{}" class="{class}" />"#,
            points_str.join(" ")
        );
    }

    fn draw_polyline(&mut self, vertices: &[Point], class: &str) {
        let points_str: Vec<String> = vertices
            .iter()
            .map(|p| format!("{},{}", p.x, -i64::from(p.y)))
            .collect();
        let _ = writeln!(
            self.content,
            r#"  <polyline points="{}" class="{class}" stroke-width="{:.3}" />"#,
            points_str.join(" "),
            self.stroke_w
        );
    }

    fn draw_circle(&mut self, p: Point, scale: f64, class: &str) {
        let _ = writeln!(
            self.content,
            r#"  <circle cx="{}" cy="{}" r="{:.3}" class="{class}" />"#,
            p.x,
            -i64::from(p.y),
            self.point_radius * scale
        );
    }

    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

/// Render `points` (small blue dots) and `hull` (closed red outline).
pub fn render_svg(points: &[Point], hull: &[Point]) -> String {
    let (min, max) = bounds(points).unwrap_or(((0.0, 0.0), (1.0, 1.0)));
    let mut svg = SvgBuilder::new(min, max, 800);
    match hull.len() {
        0 => {}
        1 | 2 => svg.draw_polyline(hull, "hull"),
        _ => svg.draw_polygon(hull, "hull"),
    }
    for &p in points {
        svg.draw_circle(p, 1.0, "input-point");
    }
    for &p in hull {
        svg.draw_circle(p, 1.3, "hull-vertex");
    }
    svg.finish()
}

/// Write the figure to `out`, creating parent directories.
pub fn write_svg<P: AsRef<Path>>(out: P, points: &[Point], hull: &[Point]) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, render_svg(points, hull)).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "figure");
    Ok(())
}

fn bounds(points: &[Point]) -> Option<((f64, f64), (f64, f64))> {
    let min_x = points.iter().map(|p| p.x).min()?;
    let max_x = points.iter().map(|p| p.x).max()?;
    let min_y = points.iter().map(|p| p.y).min()?;
    let max_y = points.iter().map(|p| p.y).max()?;
    Some((
        (f64::from(min_x), f64::from(min_y)),
        (f64::from(max_x), f64::from(max_y)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_closes_hull_as_polygon() {
        let pts = vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(1, 1),
        ];
        let h = hull::Algorithm::GrahamScan.hull(&pts);
        let svg = render_svg(&pts, &h);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"<polygon points="0,0 4,0 4,-4" class="hull" />"#));
        assert_eq!(svg.matches("<circle").count(), pts.len() + h.len());
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn degenerate_hull_renders_as_polyline() {
        let pts = vec![Point::new(0, 0), Point::new(2, 2)];
        let svg = render_svg(&pts, &pts);
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("<polygon"));
        // Empty input still yields a valid document.
        assert!(render_svg(&[], &[]).contains("</svg>"));
    }
}
