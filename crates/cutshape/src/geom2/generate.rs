//! Regular and radially jittered N-gons around a center point.
//!
//! Model
//! - Vertex `i` sits at angle `phase + i·2π/n`. The regular variant uses
//!   `phase = -π/2` (first vertex straight "up" in screen coordinates) and the
//!   exact radius. The jittered variant draws a random phase and scales each
//!   radius by `JITTER_MIN + JITTER_SPAN·u`, `u ∈ [0,1)`.
//! - Angles are strictly increasing, so the ring is star-shaped around the
//!   center and therefore simple, though not convex in general.
//! - Determinism: the jittered variant takes the RNG as a parameter; a
//!   `TaskSeed` replays the exact same draw.
//!
//! Code cross-refs: `Polygon`, `game::Task::generate`

use super::types::{Point, Polygon, PolygonError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Smallest radius factor of a jittered vertex.
pub const JITTER_MIN: f64 = 0.8;
/// Width of the radius factor range (`JITTER_MIN..JITTER_MIN + JITTER_SPAN`).
pub const JITTER_SPAN: f64 = 0.4;

/// Seed plus task index; the pair fixes every jittered draw of one task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSeed {
    pub seed: u64,
    pub index: u64,
}

impl TaskSeed {
    /// Fresh `StdRng` for this (seed, index) pair.
    ///
    /// Neighbouring indices under one seed land on unrelated streams: the index
    /// is hashed before it is folded into the seed.
    pub fn to_std_rng(self) -> StdRng {
        let key = splitmix64(self.seed ^ splitmix64(self.index));
        StdRng::seed_from_u64(key)
    }
}

/// One step of SplitMix64 (Steele, Lea, Flood 2014): golden-gamma increment,
/// then the 30/27/31 finalizer.
const fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn check_sides(sides: usize) -> Result<(), PolygonError> {
    if sides < 3 {
        return Err(PolygonError::TooFewVertices { actual: sides });
    }
    Ok(())
}

#[inline]
fn polar_point(center: Point, angle: f64, r: f64) -> Point {
    center + Point::new(angle.cos(), angle.sin()) * r
}

/// Regular `sides`-gon inscribed in the circle `(center, radius)`, first vertex at -90°.
pub fn generate_regular_polygon(
    sides: usize,
    center: Point,
    radius: f64,
) -> Result<Polygon, PolygonError> {
    check_sides(sides)?;
    let step = TAU / sides as f64;
    let verts = (0..sides)
        .map(|i| polar_point(center, -FRAC_PI_2 + step * i as f64, radius))
        .collect();
    Polygon::new(verts)
}

/// Irregular `sides`-gon: random phase, fixed angular step, jittered radii.
pub fn generate_polygon<R: Rng + ?Sized>(
    sides: usize,
    center: Point,
    radius: f64,
    rng: &mut R,
) -> Result<Polygon, PolygonError> {
    check_sides(sides)?;
    let step = TAU / sides as f64;
    let phase = rng.gen::<f64>() * TAU;
    let verts = (0..sides)
        .map(|i| {
            let r = radius * (JITTER_MIN + rng.gen::<f64>() * JITTER_SPAN);
            polar_point(center, phase + step * i as f64, r)
        })
        .collect();
    Polygon::new(verts)
}
