//! JSON shapes for polygons and reports, and the `--cut` argument parser.

use anyhow::{Context, Result};
use cutshape::api::{accuracy, area, Cut, Point, Polygon};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Polygon as `[[x, y], ...]`.
pub type PolygonDoc = Vec<[f64; 2]>;

pub fn to_doc(poly: &Polygon) -> PolygonDoc {
    poly.verts().iter().map(|p| [p.x, p.y]).collect()
}

pub fn from_doc(doc: PolygonDoc) -> Result<Polygon> {
    let verts = doc.into_iter().map(|[x, y]| Point::new(x, y)).collect();
    Ok(Polygon::new(verts)?)
}

pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PolygonDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon {}", path.display()))?;
    from_doc(doc).with_context(|| format!("invalid polygon in {}", path.display()))
}

/// Parse `x0,y0,x1,y1` into a cut.
pub fn parse_cut(s: &str) -> Result<Cut, String> {
    let nums: Vec<f64> = s
        .split(',')
        .map(|t| t.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("bad coordinate in {s:?}: {e}"))?;
    match nums.as_slice() {
        [x0, y0, x1, y1] => Ok(Cut::new(Point::new(*x0, *y0), Point::new(*x1, *y1))),
        _ => Err(format!("expected x0,y0,x1,y1, got {} value(s)", nums.len())),
    }
}

/// Parts of a cut operation with their areas and balance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsReport {
    pub parts: Vec<PolygonDoc>,
    pub areas: Vec<f64>,
    pub accuracy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splits_per_cut: Option<Vec<usize>>,
}

impl PartsReport {
    pub fn new(parts: &[Polygon], splits_per_cut: Option<Vec<usize>>) -> Self {
        Self {
            parts: parts.iter().map(to_doc).collect(),
            areas: parts.iter().map(area).collect(),
            accuracy: accuracy(parts),
            splits_per_cut,
        }
    }
}
