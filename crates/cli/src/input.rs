//! Point-list inputs: JSON files, CSV files, or JSON on stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use hull::Point;
use polars::prelude::*;

/// Read `input` as a JSON request body.
///
/// `-` reads stdin, `*.csv` is loaded through polars (`x`,`y` columns) and
/// re-encoded as JSON, anything else is read verbatim as JSON.
pub fn read_body(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading points from stdin")?;
        return Ok(buf);
    }
    if input.ends_with(".csv") {
        let points = read_csv_points(input)?;
        return Ok(serde_json::to_vec(&points)?);
    }
    fs::read(input).with_context(|| format!("reading {input}"))
}

/// Read and decode `input` into points.
pub fn read_points(input: &str) -> Result<Vec<Point>> {
    let body = read_body(input)?;
    crate::handler::parse_points(&body).with_context(|| format!("parsing {input}"))
}

/// Load a CSV with integer `x` and `y` columns (header required).
pub fn read_csv_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Int64),
            col("y").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns of {}", path.display()))?;
    tracing::debug!(rows = df.height(), "csv points");

    let xs = df.column("x")?.i64()?;
    let ys = df.column("y")?.i64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("row {row}: missing coordinate");
        };
        let x = i32::try_from(x).map_err(|_| anyhow!("row {row}: x={x} out of i32 range"))?;
        let y = i32::try_from(y).map_err(|_| anyhow!("row {row}: y={y} out of i32 range"))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_points_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n-3,7\n").unwrap();
        let pts = read_csv_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(4, 0), Point::new(-3, 7)]
        );
    }

    #[test]
    fn csv_missing_coordinate_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gap.csv");
        fs::write(&path, "x,y\n0,0\n4,\n").unwrap();
        assert!(read_csv_points(&path).is_err());
    }

    #[test]
    fn json_file_and_csv_file_agree() {
        let dir = tempdir().unwrap();
        let json = dir.path().join("pts.json");
        let csv = dir.path().join("pts.csv");
        fs::write(&json, r#"[{"x":1,"y":2},{"x":3,"y":4}]"#).unwrap();
        fs::write(&csv, "x,y\n1,2\n3,4\n").unwrap();
        let a = read_points(json.to_str().unwrap()).unwrap();
        let b = read_points(csv.to_str().unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
