//! Apply an ordered list of cuts to a working set of parts.
//!
//! Each cut is tried independently against every live part. A part that the
//! cut splits is replaced by its two children; any other part is kept as-is.
//! A single stroke can therefore split a part other than the one it was drawn
//! over, or several parts at once.

use crate::geom2::{split_polygon_with, Cut, GeomCfg, Polygon};

/// Parts after all cuts, plus how many parts each cut split.
#[derive(Clone, Debug)]
pub struct CutReport {
    pub parts: Vec<Polygon>,
    pub splits_per_cut: Vec<usize>,
}

pub fn apply_cuts(poly: &Polygon, cuts: &[Cut]) -> Vec<Polygon> {
    apply_cuts_with(poly, cuts, &GeomCfg::default())
}

pub fn apply_cuts_with(poly: &Polygon, cuts: &[Cut], cfg: &GeomCfg) -> Vec<Polygon> {
    apply_cuts_report(poly, cuts, cfg).parts
}

pub fn apply_cuts_report(poly: &Polygon, cuts: &[Cut], cfg: &GeomCfg) -> CutReport {
    let mut parts = vec![poly.clone()];
    let mut splits_per_cut = Vec::with_capacity(cuts.len());
    for (k, cut) in cuts.iter().enumerate() {
        let mut next = Vec::with_capacity(parts.len() + 1);
        let mut splits = 0usize;
        for part in parts {
            match split_polygon_with(&part, *cut, cfg) {
                Ok((a, b)) => {
                    splits += 1;
                    next.push(a);
                    next.push(b);
                }
                Err(_) => next.push(part),
            }
        }
        tracing::debug!(cut = k, splits, parts = next.len(), "cut applied");
        splits_per_cut.push(splits);
        parts = next;
    }
    CutReport {
        parts,
        splits_per_cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{area, generate_regular_polygon};
    use nalgebra::vector;

    #[test]
    fn no_cuts_keeps_the_original() {
        let hex = generate_regular_polygon(6, vector![0.0, 0.0], 100.0).unwrap();
        let parts = apply_cuts(&hex, &[]);
        assert_eq!(parts, vec![hex]);
    }

    #[test]
    fn missing_cut_leaves_parts_untouched() {
        let hex = generate_regular_polygon(6, vector![0.0, 0.0], 100.0).unwrap();
        let cut = Cut::new(vector![500.0, 500.0], vector![520.0, 500.0]);
        let report = apply_cuts_report(&hex, &[cut], &GeomCfg::default());
        assert_eq!(report.parts.len(), 1);
        assert_eq!(report.splits_per_cut, vec![0]);
    }

    #[test]
    fn one_stroke_can_split_two_parts() {
        let hex = generate_regular_polygon(6, vector![0.0, 0.0], 100.0).unwrap();
        let horizontal = Cut::new(vector![-50.0, 0.0], vector![50.0, 0.0]);
        // x = 40 crosses both halves.
        let vertical = Cut::new(vector![40.0, 10.0], vector![40.0, 40.0]);
        let report = apply_cuts_report(&hex, &[horizontal, vertical], &GeomCfg::default());
        assert_eq!(report.splits_per_cut, vec![1, 2]);
        assert_eq!(report.parts.len(), 4);
        let total: f64 = report.parts.iter().map(area).sum();
        assert!((total - area(&hex)).abs() < 1e-6 * area(&hex));
    }
}
