//! Basic 2D types and tolerances used by the cutting core.
//!
//! - `Point`: plane coordinates (`nalgebra::Vector2<f64>`).
//! - `Polygon`: closed vertex ring with at least three vertices.
//! - `Cut`, `Intersection`: the player's segment and its boundary crossings.
//! - `GeomCfg`: centralizes the determinant, edge-slack, and dedup tolerances.
//!
//! Code cross-refs: `intersect::find_intersections`, `split::split_polygon_with`

use nalgebra::Vector2;
use std::fmt;

/// Plane point / vector.
pub type Point = Vector2<f64>;

/// Extent the pixel-tuned defaults in `GeomCfg::default()` were chosen for
/// (a polygon of radius ~150 drawn on a canvas).
pub const REFERENCE_EXTENT: f64 = 300.0;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Below this `|det|` the cut and the edge count as parallel.
    pub eps_det: f64,
    /// Slack on the edge parameter so near-vertex hits are not lost.
    pub edge_slack: f64,
    /// Crossings closer than this to an accepted one are duplicates.
    pub dedup_dist: f64,
    /// Cut extension as a multiple of the polygon extent.
    pub extension: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-5,
            edge_slack: 0.01,
            dedup_dist: 10.0,
            extension: 1.0,
        }
    }
}

impl GeomCfg {
    /// Tolerances rescaled to a polygon whose bounding-box extent is `extent`.
    ///
    /// Distances scale linearly with `extent / REFERENCE_EXTENT`, the determinant
    /// threshold quadratically (it is a cross product of two edge-sized vectors).
    /// The edge slack is already dimensionless. Non-finite or non-positive
    /// extents fall back to the defaults.
    pub fn for_extent(extent: f64) -> Self {
        let base = Self::default();
        if !extent.is_finite() || extent <= 0.0 {
            return base;
        }
        let s = extent / REFERENCE_EXTENT;
        Self {
            eps_det: base.eps_det * s * s,
            dedup_dist: base.dedup_dist * s,
            ..base
        }
    }
}

/// Errors raised when building polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonError {
    TooFewVertices { actual: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { actual } => {
                write!(f, "polygon needs at least 3 vertices, got {actual}")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Simple polygon as an implicitly closed vertex ring.
///
/// Invariants:
/// - At least three vertices.
/// - Edge `i` joins `verts[i]` and `verts[(i + 1) % n]`.
/// - Winding order is not constrained.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Point>,
}

impl Polygon {
    pub fn new(verts: Vec<Point>) -> Result<Self, PolygonError> {
        if verts.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                actual: verts.len(),
            });
        }
        Ok(Self { verts })
    }

    #[inline]
    pub fn verts(&self) -> &[Point] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edge `i` as `(start, end)`, wrapping at the last vertex.
    #[inline]
    pub fn edge(&self, i: usize) -> (Point, Point) {
        let n = self.verts.len();
        (self.verts[i % n], self.verts[(i + 1) % n])
    }

    pub fn into_verts(self) -> Vec<Point> {
        self.verts
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = PolygonError;

    fn try_from(verts: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(verts)
    }
}

/// Finite segment drawn by the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cut {
    pub start: Point,
    pub end: Point,
}

impl Cut {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Boundary crossing of an extended cut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point,
    pub edge_index: usize,
    /// Edge parameter of `point`: 0 at the edge start, 1 at the edge end.
    pub t: f64,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn of(poly: &Polygon) -> Self {
        let first = poly.verts()[0];
        poly.verts()
            .iter()
            .skip(1)
            .fold(Bounds { min: first, max: first }, |b, p| Bounds {
                min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Larger of width and height.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.width().max(self.height())
    }
}
