//! Boundary crossings of an (already extended) cut.
//!
//! - `segment_intersection`: parametric two-segment solve with eps-aware bounds.
//! - `find_intersections`: scan every edge in order, dropping near-duplicate hits.
//!
//! Nothing here fails: parallel edges and out-of-range parameters are simply
//! not reported, and the caller judges the resulting count.

use super::measure::distance;
use super::types::{Cut, GeomCfg, Intersection, Point, Polygon};

#[inline]
fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Intersection of segment `p0→p1` (the cut) with edge `q0→q1`.
///
/// Accepts when the cut parameter is in `[0,1]` and the edge parameter is in
/// `[-edge_slack, 1 + edge_slack]`. Returns `None` for `|det| < eps_det`.
pub fn segment_intersection(
    p0: Point,
    p1: Point,
    q0: Point,
    q1: Point,
    cfg: &GeomCfg,
) -> Option<Point> {
    let r = p1 - p0;
    let s = q1 - q0;
    let det = cross(r, s);
    if det.abs() < cfg.eps_det {
        return None;
    }
    let w = q0 - p0;
    let t = cross(w, s) / det;
    let u = cross(w, r) / det;
    if (0.0..=1.0).contains(&t) && u >= -cfg.edge_slack && u <= 1.0 + cfg.edge_slack {
        Some(p0 + r * t)
    } else {
        None
    }
}

/// Parameter of `p` along `a→b`, measured on the dominant axis of the edge.
pub fn edge_parameter(a: Point, b: Point, p: Point) -> f64 {
    let d = b - a;
    if d.x.abs() > d.y.abs() {
        (p.x - a.x) / d.x
    } else if d.y != 0.0 {
        (p.y - a.y) / d.y
    } else {
        0.0
    }
}

/// All distinct crossings of `line` with the boundary of `poly`, in edge order.
pub fn find_intersections(line: &Cut, poly: &Polygon, cfg: &GeomCfg) -> Vec<Intersection> {
    let mut out: Vec<Intersection> = Vec::with_capacity(2);
    for i in 0..poly.len() {
        let (a, b) = poly.edge(i);
        let Some(point) = segment_intersection(line.start, line.end, a, b, cfg) else {
            continue;
        };
        if out
            .iter()
            .any(|hit| distance(point, hit.point) < cfg.dedup_dist)
        {
            tracing::trace!(edge = i, x = point.x, y = point.y, "duplicate crossing");
            continue;
        }
        out.push(Intersection {
            point,
            edge_index: i,
            t: edge_parameter(a, b, point),
        });
    }
    out
}
