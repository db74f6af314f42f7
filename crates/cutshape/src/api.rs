//! Curated surface for callers of the cutting core.
//!
//! Names follow the puzzle's vocabulary: generate a shape, split it with a
//! cut, measure the parts.

// Shapes
pub use crate::geom2::{
    generate_polygon, generate_regular_polygon, Bounds, Polygon, PolygonError, TaskSeed,
};
// Cutting
pub use crate::cuts::{apply_cuts, apply_cuts_report, apply_cuts_with, CutReport};
pub use crate::geom2::{
    extend_cut, find_intersections, split_polygon, split_polygon_with, Cut, GeomCfg,
    Intersection, SplitFailure,
};
// Measuring
pub use crate::geom2::{accuracy, area, centroid, distance, signed_area, Point};
// Rules
pub use crate::game::{
    hint_lines, score_answer, CutRejected, Difficulty, DifficultySettings, Grade, Session,
    SessionState, SessionSummary, SubmitOutcome, Task, MIN_CUT_LENGTH,
};

/// Split, then score the two halves; `None` when the cut does not split.
///
/// Shorthand for single-stroke previews where only the balance matters.
pub fn preview_split(poly: &Polygon, cut: Cut) -> Option<(Polygon, Polygon, f64)> {
    let (a, b) = split_polygon(poly, cut).ok()?;
    let acc = accuracy(&[a.clone(), b.clone()]);
    Some((a, b, acc))
}
