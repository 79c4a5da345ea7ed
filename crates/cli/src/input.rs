//! Point table loading for the `sort` command.
//!
//! - `.csv` / `.parquet`: read with polars; two named columns become parallel
//!   coordinate slices.
//! - `.json`: `[[x, y], ...]` becomes a list of pairs.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Points as read from disk, in whichever shape the source provides.
#[derive(Debug, PartialEq)]
pub enum PointTable {
    Pairs(Vec<(f64, f64)>),
    Columns { xs: Vec<f64>, ys: Vec<f64> },
}

impl PointTable {
    pub fn len(&self) -> usize {
        match self {
            PointTable::Pairs(p) => p.len(),
            PointTable::Columns { xs, .. } => xs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clockwise ring through the shape-matching entry point.
    pub fn sort_clockwise(&self) -> Result<Vec<(f64, f64)>> {
        match self {
            PointTable::Pairs(p) => Ok(clockring::sort_clockwise_pairs(p)),
            PointTable::Columns { xs, ys } => Ok(clockring::sort_clockwise_xy(xs, ys)?),
        }
    }
}

pub fn load_points(path: &Path, x_col: &str, y_col: &str) -> Result<PointTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json_pairs(&bytes).with_context(|| format!("parsing {}", path.display()))
        }
        "csv" => {
            // Full-file inference: integer-looking leading rows must not pin the dtype.
            let df = LazyCsvReader::new(path)
                .with_infer_schema_length(None)
                .finish()?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            columns_from_frame(&df, x_col, y_col)
        }
        "parquet" => {
            let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            columns_from_frame(&df, x_col, y_col)
        }
        other => bail!(
            "unsupported input extension {:?} (expected csv, parquet, or json)",
            other
        ),
    }
}

pub fn parse_json_pairs(bytes: &[u8]) -> Result<PointTable> {
    let raw: Vec<[f64; 2]> = serde_json::from_slice(bytes)?;
    Ok(PointTable::Pairs(raw.into_iter().map(|[x, y]| (x, y)).collect()))
}

fn columns_from_frame(df: &DataFrame, x_col: &str, y_col: &str) -> Result<PointTable> {
    let xs = f64_column(df, x_col)?;
    let ys = f64_column(df, y_col)?;
    Ok(PointTable::Columns { xs, ys })
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing coordinate column {:?}", name))?
        .cast(&DataType::Float64)?;
    let values = col.f64()?;
    let mut out = Vec::with_capacity(values.len());
    for (row, v) in values.into_iter().enumerate() {
        match v {
            Some(v) => out.push(v),
            None => bail!("null coordinate in column {:?} at row {}", name, row),
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
    fn json_pairs_parse() {
        let table = parse_json_pairs(b"[[1.5, 2.0], [3, -4]]").unwrap();
        assert_eq!(table, PointTable::Pairs(vec![(1.5, 2.0), (3.0, -4.0)]));
        assert!(parse_json_pairs(b"[[1.0]]").is_err());
    }

    #[test]
    fn csv_columns_load_and_sort() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,east,north\n1,0,0\n2,0,2\n3,2,2\n4,2,0\n").unwrap();
        let table = load_points(&path, "east", "north").unwrap();
        assert_eq!(table.len(), 4);
        let ring = table.sort_clockwise().unwrap();
        assert_eq!(ring, vec![(2.0, 0.0), (0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
    }

    #[test]
    fn csv_decimals_after_integer_rows_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("late_decimals.csv");
        let mut text = String::from("x,y\n");
        for k in 0..150 {
            text.push_str(&format!("{},{}\n", 612_000 + k, 9_781_000 + (k % 7)));
        }
        text.push_str("612000.5,9781000.25\n");
        fs::write(&path, text).unwrap();
        let table = load_points(&path, "x", "y").unwrap();
        assert_eq!(table.len(), 151);
        match table {
            PointTable::Columns { xs, ys } => {
                assert_eq!(xs[150], 612_000.5);
                assert_eq!(ys[150], 9_781_000.25);
                assert_eq!(xs[0], 612_000.0);
            }
            PointTable::Pairs(_) => panic!("expected columns"),
        }
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,z\n1,2\n").unwrap();
        let err = load_points(&path, "x", "y").unwrap_err();
        assert!(format!("{:#}", err).contains("\"y\""));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_points(Path::new("points.kml"), "x", "y").is_err());
    }
}
