//! 2D cutting core: polygon generation, cut extension, boundary crossings,
//! splitting, and area-based scoring.
//!
//! Purpose
//! - Decide whether a straight cut crosses a simple polygon's boundary exactly
//!   twice and, if so, produce the two resulting parts.
//! - Keep every operation a pure function over its inputs; the only randomness
//!   (jittered generation) comes from an injected RNG.
//!
//! Conventions
//! - Tolerances live in `GeomCfg`. The defaults are tuned for canvas-scale
//!   polygons (extent ~300); use `GeomCfg::for_extent` for other scales.
//! - Failures are values (`SplitFailure`, `PolygonError`), never panics.
//!
//! Code cross-refs: `Polygon`, `Cut`, `split_polygon`, `crate::cuts::apply_cuts`

pub mod extend;
pub mod generate;
pub mod intersect;
pub mod measure;
pub mod split;
mod types;

pub use extend::{extend_cut, DEFAULT_EXTENSION};
pub use generate::{generate_polygon, generate_regular_polygon, TaskSeed};
pub use intersect::{edge_parameter, find_intersections, segment_intersection};
pub use measure::{accuracy, area, centroid, distance, signed_area};
pub use split::{split_polygon, split_polygon_with, SplitFailure};
pub use types::{
    Bounds, Cut, GeomCfg, Intersection, Point, Polygon, PolygonError, REFERENCE_EXTENT,
};

#[cfg(test)]
mod tests;
