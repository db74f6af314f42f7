use super::*;
use crate::cuts::apply_cuts;
use nalgebra::vector;
use proptest::prelude::*;

const SQRT3: f64 = 1.732_050_807_568_877_2;

fn hexagon() -> Polygon {
    generate_regular_polygon(6, vector![0.0, 0.0], 100.0).unwrap()
}

fn rel_err(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs().max(1e-12)
}

#[test]
fn hexagon_area_matches_closed_form() {
    let expected = 1.5 * SQRT3 * 100.0 * 100.0;
    assert!(rel_err(area(&hexagon()), expected) < 1e-12);
}

#[test]
fn split_conserves_area_on_hexagon() {
    let hex = hexagon();
    let cut = Cut::new(vector![-30.0, -20.0], vector![10.0, 35.0]);
    let (a, b) = split_polygon(&hex, cut).unwrap();
    assert!(a.len() >= 3 && b.len() >= 3);
    assert!(rel_err(area(&a) + area(&b), area(&hex)) < 1e-6);
}

#[test]
fn two_cuts_give_three_parts() {
    let hex = hexagon();
    // C1 halves the hexagon along y = 0.
    let c1 = Cut::new(vector![-50.0, 0.0], vector![50.0, 0.0]);
    // C2 cuts the corner (-50√3, 50) off the upper half only: it runs from the
    // middle of the left edge to the middle of the upper-left edge.
    let p = vector![-50.0 * SQRT3, 25.0];
    let q = vector![-25.0 * SQRT3, 75.0];
    let c2 = Cut::new(p + (q - p) * 0.2, p + (q - p) * 0.8);
    let parts = apply_cuts(&hex, &[c1, c2]);
    assert_eq!(parts.len(), 3);
    let total: f64 = parts.iter().map(area).sum();
    assert!(rel_err(total, area(&hex)) < 1e-6);
}

#[test]
fn far_parallel_cut_fails_cleanly() {
    let hex = hexagon();
    // Parallel to the two vertical edges (x = ±50√3) and far to the right.
    let cut = Cut::new(vector![400.0, -30.0], vector![400.0, 30.0]);
    assert_eq!(
        split_polygon(&hex, cut),
        Err(SplitFailure::NoCrossing { found: 0 })
    );
}

#[test]
fn scale_relative_tolerances_split_tiny_polygons() {
    // At unit scale the canvas-tuned dedup distance swallows every crossing.
    let tiny = generate_regular_polygon(5, vector![0.0, 0.0], 1.0).unwrap();
    let cut = Cut::new(vector![-0.2, -0.1], vector![0.2, 0.1]);
    assert!(matches!(
        split_polygon(&tiny, cut),
        Err(SplitFailure::NoCrossing { found: 1 })
    ));
    let cfg = GeomCfg::for_extent(Bounds::of(&tiny).extent());
    let (a, b) = split_polygon_with(&tiny, cut, &cfg).unwrap();
    assert!(rel_err(area(&a) + area(&b), area(&tiny)) < 1e-9);
}

#[test]
fn for_extent_at_reference_scale_is_default() {
    assert_eq!(GeomCfg::for_extent(REFERENCE_EXTENT), GeomCfg::default());
    assert_eq!(GeomCfg::for_extent(f64::NAN), GeomCfg::default());
    assert_eq!(GeomCfg::for_extent(-1.0), GeomCfg::default());
}

#[test]
fn polygon_requires_three_vertices() {
    let err = Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]).unwrap_err();
    assert_eq!(err, PolygonError::TooFewVertices { actual: 2 });
    assert!(Polygon::try_from(vec![vector![0.0, 0.0]; 3]).is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A line through the generation center crosses a star-shaped ring twice,
    /// and the two parts always add back up to the original area.
    #[test]
    fn split_through_center_conserves_area(
        seed in any::<u64>(),
        sides in 3usize..10,
        radius in 100.0f64..250.0,
        angle in 0.0f64..std::f64::consts::PI,
        regular in any::<bool>(),
    ) {
        let center = vector![300.0, 200.0];
        let poly = if regular {
            generate_regular_polygon(sides, center, radius).unwrap()
        } else {
            let mut rng = TaskSeed { seed, index: 0 }.to_std_rng();
            generate_polygon(sides, center, radius, &mut rng).unwrap()
        };
        let dir = vector![angle.cos(), angle.sin()] * radius;
        let cut = Cut::new(center - dir, center + dir);
        let (a, b) = split_polygon(&poly, cut).unwrap();
        prop_assert!(a.len() >= 3 && b.len() >= 3);
        prop_assert!(rel_err(area(&a) + area(&b), area(&poly)) < 1e-6);
        let acc = accuracy(&[a, b]);
        prop_assert!((0.0..=1.0).contains(&acc));
    }

    /// Star cuts through the center never lose area. The strokes are spread
    /// evenly so no two of them meet at a shared chord end.
    #[test]
    fn star_cuts_conserve_area(
        seed in any::<u64>(),
        count in 1usize..4,
        phase in 0.0f64..std::f64::consts::PI,
    ) {
        let center = vector![0.0, 0.0];
        let mut rng = TaskSeed { seed, index: 1 }.to_std_rng();
        let poly = generate_polygon(6, center, 150.0, &mut rng).unwrap();
        let cuts: Vec<Cut> = (0..count)
            .map(|k| {
                let a = phase + std::f64::consts::PI * k as f64 / count as f64;
                let d = vector![a.cos(), a.sin()] * 150.0;
                Cut::new(center - d, center + d)
            })
            .collect();
        let parts = apply_cuts(&poly, &cuts);
        prop_assert!(parts.len() >= 2);
        let total: f64 = parts.iter().map(area).sum();
        prop_assert!(rel_err(total, area(&poly)) < 1e-6);
    }
}
