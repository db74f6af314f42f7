//! Area, vertex centroid, and the equal-area accuracy score.

use super::types::{Point, Polygon};

#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

/// Shoelace sum / 2. Positive for counterclockwise rings (y up).
pub fn signed_area(poly: &Polygon) -> f64 {
    let v = poly.verts();
    let n = v.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = v[i];
        let q = v[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Unsigned area; independent of winding.
#[inline]
pub fn area(poly: &Polygon) -> f64 {
    signed_area(poly).abs()
}

/// Arithmetic mean of the vertices (not the area-weighted centroid).
pub fn centroid(poly: &Polygon) -> Point {
    let sum = poly
        .verts()
        .iter()
        .fold(Point::zeros(), |acc, p| acc + p);
    sum / poly.len() as f64
}

/// Equal-area score in `[0,1]`: `1 - max_i |a_i - mean| / mean`, floored at 0.
///
/// Fewer than two parts score 0, as does a set whose mean area is 0.
pub fn accuracy(parts: &[Polygon]) -> f64 {
    if parts.len() < 2 {
        return 0.0;
    }
    let areas: Vec<f64> = parts.iter().map(area).collect();
    let mean = areas.iter().sum::<f64>() / areas.len() as f64;
    if mean <= 0.0 {
        return 0.0;
    }
    let max_dev = areas
        .iter()
        .map(|a| (a - mean).abs() / mean)
        .fold(0.0, f64::max);
    (1.0 - max_dev).max(0.0)
}
