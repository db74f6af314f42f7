use crate::geom2::{
    centroid, generate_polygon, generate_regular_polygon, Cut, Point, Polygon, PolygonError,
};
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Strokes shorter than this are treated as accidental clicks.
pub const MIN_CUT_LENGTH: f64 = 20.0;
/// Length of each hint ray drawn from the centroid.
pub const HINT_RAY_LENGTH: f64 = 150.0;

/// One puzzle: cut `polygon` into `target_parts` pieces using at most `cuts_allowed` strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub polygon: Polygon,
    pub sides: usize,
    pub target_parts: usize,
    pub cuts_allowed: usize,
    pub regular: bool,
}

impl Task {
    /// Shape for question `question` of level `level` (both 1-based).
    ///
    /// Side count grows every second level; even questions get a regular
    /// polygon, odd ones a jittered one.
    pub fn generate<R: Rng + ?Sized>(
        level: u32,
        question: u32,
        center: Point,
        rng: &mut R,
    ) -> Result<Self, PolygonError> {
        let sides = 3 + rng.gen_range(0..3usize) + (level / 2) as usize;
        let radius = 150.0 + 10.0 * level as f64;
        let regular = question % 2 == 0;
        let polygon = if regular {
            generate_regular_polygon(sides, center, radius)?
        } else {
            generate_polygon(sides, center, radius, rng)?
        };
        Ok(Self::for_polygon(polygon, regular))
    }

    /// Wrap an existing shape: an n-gon must be cut into n-1 parts with n-2 strokes.
    pub fn for_polygon(polygon: Polygon, regular: bool) -> Self {
        let sides = polygon.len();
        Self {
            polygon,
            sides,
            target_parts: sides - 1,
            cuts_allowed: sides - 2,
            regular,
        }
    }
}

/// Rays from the vertex centroid splitting the full turn into `cuts_allowed + 1` sectors.
pub fn hint_lines(poly: &Polygon, cuts_allowed: usize) -> Vec<Cut> {
    let c = centroid(poly);
    let step = TAU / (cuts_allowed + 1) as f64;
    (0..cuts_allowed)
        .map(|i| {
            let a = -FRAC_PI_2 + step * i as f64;
            Cut::new(c, c + Point::new(a.cos(), a.sin()) * HINT_RAY_LENGTH)
        })
        .collect()
}
