//! Split a polygon along a cut that crosses its boundary exactly twice.
//!
//! Construction (crossings `c1`, `c2` on edges `e1 < e2`, `n` vertices):
//! - left  = `c1, v[e1+1], …, v[e2], c2`
//! - right = `c2, v[e2+1], …, v[e1+n], c1` (indices mod n)
//!
//! Together the two rings retrace the original boundary once and the chord
//! `c1–c2` once each, so their areas sum to the original area.

use super::extend::extend_cut;
use super::intersect::find_intersections;
use super::types::{Bounds, Cut, GeomCfg, Intersection, Point, Polygon};
use std::fmt;

/// Why a cut did not split a polygon. Callers treat all cases as "redraw".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitFailure {
    /// Fewer than two crossings: the line misses or grazes the shape.
    NoCrossing { found: usize },
    /// More than two crossings (concave shape re-entered).
    OverCrossing { found: usize },
    /// A resulting ring would have fewer than three vertices.
    DegeneratePart { left: usize, right: usize },
}

impl fmt::Display for SplitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCrossing { found } => {
                write!(f, "cut does not cross the shape ({found} crossing(s), need 2)")
            }
            Self::OverCrossing { found } => {
                write!(f, "cut crosses the shape {found} times, need exactly 2")
            }
            Self::DegeneratePart { left, right } => {
                write!(f, "split produced a degenerate part ({left} / {right} vertices)")
            }
        }
    }
}

impl std::error::Error for SplitFailure {}

/// Split with the default tolerances.
pub fn split_polygon(poly: &Polygon, cut: Cut) -> Result<(Polygon, Polygon), SplitFailure> {
    split_polygon_with(poly, cut, &GeomCfg::default())
}

/// Split with explicit tolerances (see `GeomCfg::for_extent` for scale-relative ones).
pub fn split_polygon_with(
    poly: &Polygon,
    cut: Cut,
    cfg: &GeomCfg,
) -> Result<(Polygon, Polygon), SplitFailure> {
    let line = extend_cut(cut, poly, cfg.extension);
    let hits = find_intersections(&line, poly, cfg);
    match hits.as_slice() {
        [c1, c2] => split_at(poly, c1, c2),
        _ => {
            tracing::debug!(
                crossings = hits.len(),
                extent = Bounds::of(poly).extent(),
                "cut rejected"
            );
            if hits.len() < 2 {
                Err(SplitFailure::NoCrossing { found: hits.len() })
            } else {
                Err(SplitFailure::OverCrossing { found: hits.len() })
            }
        }
    }
}

fn split_at(
    poly: &Polygon,
    c1: &Intersection,
    c2: &Intersection,
) -> Result<(Polygon, Polygon), SplitFailure> {
    let n = poly.len();
    let v = poly.verts();
    let (e1, e2) = (c1.edge_index, c2.edge_index);
    debug_assert!(e1 <= e2, "crossings must come in edge-scan order");

    let mut left: Vec<Point> = Vec::with_capacity(e2 - e1 + 2);
    let mut right: Vec<Point> = Vec::with_capacity(n - (e2 - e1) + 2);
    left.push(c1.point);
    right.push(c2.point);
    if e1 != e2 {
        left.extend((e1 + 1..=e2).map(|k| v[k % n]));
        right.extend((e2 + 1..=e1 + n).map(|k| v[k % n]));
    }
    left.push(c2.point);
    right.push(c1.point);

    let (l, r) = (left.len(), right.len());
    match (Polygon::new(left), Polygon::new(right)) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => {
            tracing::debug!(left = l, right = r, "degenerate split");
            Err(SplitFailure::DegeneratePart { left: l, right: r })
        }
    }
}
