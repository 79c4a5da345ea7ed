//! Sidecar record for every ring written by `sort`.
//!
//! `<ring>.json` gets a `<ring>.provenance.json` neighbour describing where the
//! points came from and what the sorter made of them, so a ring can be checked
//! without re-reading the input table.

use anyhow::{Context, Result};
use clockring::ring::{signed_area, Point2};
use clockring::UtmZone;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Input file as seen at sort time.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InputRecord {
    pub path: String,
    /// File size in bytes; `None` if the file vanished after reading.
    pub bytes: Option<u64>,
    pub x_col: String,
    pub y_col: String,
}

/// Geometry summary of the written ring.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RingSummary {
    pub zone: String,
    pub epsg: u32,
    pub points: usize,
    pub closed: bool,
    pub clockwise: bool,
    /// Shoelace area in squared coordinate units (m² for UTM); negative when clockwise.
    pub signed_area: f64,
    /// `[min_x, min_y, max_x, max_y]`; absent for an empty ring.
    pub bbox: Option<[f64; 4]>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SortProvenance {
    pub code_rev: String,
    pub clockring_version: String,
    pub tag: Option<String>,
    pub input: InputRecord,
    pub ring: RingSummary,
    pub output: String,
}

impl RingSummary {
    /// Summarize `ring` (open or closed; the closing vertex adds no area).
    pub fn from_ring(zone: UtmZone, ring: &[[f64; 2]], closed: bool) -> Self {
        let pts: Vec<Point2> = ring.iter().map(|&[x, y]| Point2::new(x, y)).collect();
        let area = signed_area(&pts);
        let points = if closed {
            ring.len().saturating_sub(1)
        } else {
            ring.len()
        };
        Self {
            zone: zone.to_string(),
            epsg: zone.epsg(),
            points,
            closed,
            clockwise: area < 0.0,
            signed_area: area,
            bbox: bbox(&pts),
        }
    }
}

fn bbox(pts: &[Point2]) -> Option<[f64; 4]> {
    let first = pts.first()?;
    let mut b = [first.x, first.y, first.x, first.y];
    for p in &pts[1..] {
        b[0] = b[0].min(p.x);
        b[1] = b[1].min(p.y);
        b[2] = b[2].max(p.x);
        b[3] = b[3].max(p.y);
    }
    Some(b)
}

pub fn sidecar_path(ring_path: &Path) -> PathBuf {
    let stem = ring_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ring".to_string());
    ring_path.with_file_name(format!("{stem}.provenance.json"))
}

/// Write the sidecar next to `ring_path` and return its location.
pub fn write_sidecar(
    ring_path: &Path,
    input: InputRecord,
    ring: RingSummary,
    tag: Option<String>,
) -> Result<PathBuf> {
    let doc = SortProvenance {
        code_rev: code_rev(),
        clockring_version: clockring::VERSION.to_string(),
        tag,
        input,
        ring,
        output: ring_path.to_string_lossy().into_owned(),
    };
    let path = sidecar_path(ring_path);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

impl InputRecord {
    pub fn new(path: &Path, x_col: &str, y_col: &str) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            bytes: fs::metadata(path).ok().map(|m| m.len()),
            x_col: x_col.to_string(),
            y_col: y_col.to_string(),
        }
    }
}

/// Commit of the running build: `GIT_COMMIT` (build or run time), else `git rev-parse`.
pub fn code_rev() -> String {
    let from_env = [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ];
    from_env
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_ring() {
        let derived = sidecar_path(Path::new("/tmp/output/lot_12.json"));
        assert_eq!(derived, Path::new("/tmp/output/lot_12.provenance.json"));
    }

    #[test]
    fn summary_of_closed_square() {
        let ring = [[2.0, 0.0], [0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]];
        let s = RingSummary::from_ring(UtmZone::default(), &ring, true);
        assert_eq!(s.points, 4);
        assert_eq!(s.epsg, 32717);
        assert!(s.clockwise);
        assert!((s.signed_area + 4.0).abs() < 1e-12);
        assert_eq!(s.bbox, Some([0.0, 0.0, 2.0, 2.0]));

        let empty = RingSummary::from_ring(UtmZone::default(), &[], false);
        assert_eq!(empty.points, 0);
        assert!(!empty.clockwise);
        assert_eq!(empty.bbox, None);
    }

    #[test]
    fn write_sidecar_records_input_and_ring() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, "x,y\n0,0\n").unwrap();
        let ring_path = dir.path().join("ring.json");
        let ring = [[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]];
        let summary = RingSummary::from_ring(UtmZone::default(), &ring, false);
        let prov_path = write_sidecar(
            &ring_path,
            InputRecord::new(&input, "x", "y"),
            summary,
            Some("lot-12".to_string()),
        )
        .unwrap();
        let parsed: SortProvenance =
            serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed.input.bytes, Some(8));
        assert_eq!(parsed.ring.points, 3);
        assert!(parsed.ring.clockwise);
        assert_eq!(parsed.tag.as_deref(), Some("lot-12"));
        assert_eq!(parsed.output, ring_path.to_string_lossy());
    }
}
