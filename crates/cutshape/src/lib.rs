//! Polygon cutting core and puzzle rules.
//!
//! A cut is a short segment drawn by the player. The core extends it across a
//! simple polygon, finds where it crosses the boundary, and splits the polygon
//! when there are exactly two crossings. The game layer applies several cuts
//! in order and scores how equal the resulting areas are.
//!
//! Layout
//! - `geom2`: generation, extension, crossings, splitting, area/accuracy.
//! - `cuts`: ordered cut sequences over a working set of parts.
//! - `game`: difficulty, tasks, scoring, and the session state machine.
//! - `api`: curated re-exports for callers (CLI, benches).

pub mod api;
pub mod cuts;
pub mod game;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Cut, GeomCfg, Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cuts::{apply_cuts, apply_cuts_report, apply_cuts_with, CutReport};
    pub use crate::game::{Difficulty, Session, SessionState, SubmitOutcome, Task};
    pub use crate::geom2::{
        accuracy, area, centroid, distance, generate_polygon, generate_regular_polygon,
        split_polygon, split_polygon_with, Bounds, Cut, GeomCfg, Point, Polygon, SplitFailure,
        TaskSeed,
    };
    pub use nalgebra::Vector2 as Vec2;
}
