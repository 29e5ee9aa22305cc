//! Point loading for the CLI: CSV/Parquet tables with `x`,`y` columns, or JSON
//! `[[x, y], ...]`. Row order is the insertion order.

use anyhow::{bail, Context, Result};
use lrhull::Point;
use polars::prelude::*;
use std::path::Path;

pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let points = match ext.as_str() {
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            points_from_frame(lf)?
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            points_from_frame(lf)?
        }
        "json" => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
            raw.into_iter().map(|[x, y]| Point::new(x, y)).collect()
        }
        other => bail!("unsupported input extension `{other}` (expected csv, parquet or json)"),
    };
    tracing::info!(path = %path.display(), n = points.len(), "points_loaded");
    Ok(points)
}

fn points_from_frame(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .context("selecting x,y columns")?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row}: missing coordinate"),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn csv_rows_keep_order_and_accept_integers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n1.5,0\n0,2\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.5, 0.0),
                Point::new(0.0, 2.0)
            ]
        );
    }

    #[test]
    fn json_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[1, 2], [3.5, -4]]").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.txt");
        fs::write(&path, "0 0").unwrap();
        let err = load_points(&path).unwrap_err();
        assert!(err.to_string().contains("txt"));
    }
}
