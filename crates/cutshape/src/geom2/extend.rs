//! Lengthen a short player cut so it spans the whole polygon.

use super::types::{Bounds, Cut, Polygon};

/// Default extension, in multiples of the polygon extent.
pub const DEFAULT_EXTENSION: f64 = 1.0;

/// Push both endpoints of `cut` outward by `extent · factor` along its direction.
///
/// `extent` is the larger side of the polygon's bounding box, so any cut that
/// starts inside the box reaches past the boundary on both sides. A zero-length
/// cut has no direction and is returned unchanged.
pub fn extend_cut(cut: Cut, poly: &Polygon, factor: f64) -> Cut {
    let d = cut.end - cut.start;
    let len = d.norm();
    if len == 0.0 {
        return cut;
    }
    let dir = d / len;
    let ext = Bounds::of(poly).extent() * factor;
    Cut {
        start: cut.start - dir * ext,
        end: cut.end + dir * ext,
    }
}
