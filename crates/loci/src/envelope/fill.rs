//! Interior fill points along envelope rows.
//!
//! Each interior level's `[r_min, r_max]` span is cut into `k` equal steps
//! derived from a target spacing; the strictly interior step points become
//! candidate fill points. Boundary levels (lowest and highest) are skipped.

use crate::error::{GeomError, GeomResult};
use crate::geom2::{filter_inside, pt, round_to, GeomCfg, Point};

use super::table::EnvelopeTable;

/// How the target spacing turns into a step count per row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillSpacing {
    /// Round the step count up: actual spacing is at most the target.
    #[default]
    AtMost,
    /// Steps starting within two targets of `r_max` are not counted: spacing is at least the target.
    AtLeast,
}

/// Upper bound on fill steps along one row.
pub const MAX_FILL_STEPS: i64 = 1_000_000;

/// Candidate interior points for every finite interior row of `table`.
///
/// Errors with `InvalidSpacing` unless `delta` is finite and positive, and
/// when `delta` would cut a row into more than [`MAX_FILL_STEPS`] steps.
pub fn interior_points(
    table: &EnvelopeTable,
    delta: f64,
    spacing: FillSpacing,
    cfg: &GeomCfg,
) -> GeomResult<Vec<Point>> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(GeomError::InvalidSpacing { delta });
    }
    let rows = table.rows();
    if rows.len() < 3 {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for row in rows[1..rows.len() - 1].iter().filter(|r| r.is_hit()) {
        let steps = step_count(row.r_min, row.r_max, delta, spacing)
            .ok_or(GeomError::InvalidSpacing { delta })?;
        if steps <= 0 {
            continue;
        }
        let step = (row.r_max - row.r_min) / steps as f64;
        let stop = round_to(row.r_max, cfg.level_decimals);
        out.extend(
            (1..steps)
                .map(|i| row.r_min + i as f64 * step)
                .take_while(|&r| round_to(r, cfg.level_decimals) < stop)
                .map(|r| pt(r, row.level)),
        );
    }
    Ok(out)
}

/// `interior_points` restricted to those inside `ring`.
pub fn fill_locus(
    ring: &[Point],
    table: &EnvelopeTable,
    delta: f64,
    spacing: FillSpacing,
    cfg: &GeomCfg,
) -> GeomResult<Vec<Point>> {
    let candidates = interior_points(table, delta, spacing, cfg)?;
    Ok(filter_inside(ring, &candidates))
}

/// Number of `delta` strides from `lo` that start below `hi`; `AtLeast` drops
/// the strides that start within `2 * delta` of `hi`. `None` past the step cap.
fn step_count(lo: f64, hi: f64, delta: f64, spacing: FillSpacing) -> Option<i64> {
    if hi <= lo {
        return Some(0);
    }
    let span = (hi - lo) / delta;
    if !span.is_finite() || span > MAX_FILL_STEPS as f64 {
        return None;
    }
    let count = span.ceil() as i64;
    match spacing {
        FillSpacing::AtMost => Some(count),
        FillSpacing::AtLeast => {
            let first_dropped = ((span - 2.0).floor() as i64 + 1).max(0);
            Some(count - (count - first_dropped).max(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{EnvelopeRow, RangeTag};

    fn table(rows: &[(f64, f64, f64)]) -> EnvelopeTable {
        EnvelopeTable {
            range: RangeTag::new(1.0, 2.0),
            rows: rows
                .iter()
                .map(|&(level, r_min, r_max)| EnvelopeRow { level, r_min, r_max })
                .collect(),
            base_levels: rows.len(),
        }
    }

    #[test]
    fn step_counts_per_spacing() {
        assert_eq!(step_count(0.0, 10.0, 1.0, FillSpacing::AtMost), Some(10));
        assert_eq!(step_count(0.0, 10.0, 3.0, FillSpacing::AtMost), Some(4));
        // Steps starting at r = 6 and r = 9 end within 2·delta of 10.
        assert_eq!(step_count(0.0, 10.0, 3.0, FillSpacing::AtLeast), Some(2));
        // Only the stride starting at r = 5 is dropped.
        assert_eq!(step_count(0.0, 10.0, 5.0, FillSpacing::AtLeast), Some(1));
        assert_eq!(step_count(0.0, 0.5, 1.0, FillSpacing::AtLeast), Some(0));
        assert_eq!(step_count(2.0, 2.0, 1.0, FillSpacing::AtMost), Some(0));
    }

    #[test]
    fn interior_rows_only() {
        let t = table(&[(0.0, 0.0, 10.0), (5.0, 0.0, 10.0), (10.0, 0.0, 10.0)]);
        let pts = interior_points(&t, 2.5, FillSpacing::AtMost, &GeomCfg::default()).unwrap();
        assert_eq!(pts, vec![pt(2.5, 5.0), pt(5.0, 5.0), pt(7.5, 5.0)]);
    }

    #[test]
    fn at_least_spacing_widens_steps() {
        let t = table(&[(0.0, 0.0, 10.0), (5.0, 0.0, 10.0), (10.0, 0.0, 10.0)]);
        let wide = interior_points(&t, 3.0, FillSpacing::AtLeast, &GeomCfg::default()).unwrap();
        assert_eq!(wide, vec![pt(5.0, 5.0)]);
        let tight = interior_points(&t, 3.0, FillSpacing::AtMost, &GeomCfg::default()).unwrap();
        assert_eq!(tight, vec![pt(2.5, 5.0), pt(5.0, 5.0), pt(7.5, 5.0)]);
    }

    #[test]
    fn sentinel_rows_and_bad_delta() {
        let t = table(&[
            (0.0, 0.0, 10.0),
            (5.0, f64::INFINITY, f64::NEG_INFINITY),
            (10.0, 0.0, 10.0),
        ]);
        assert!(interior_points(&t, 1.0, FillSpacing::AtMost, &GeomCfg::default())
            .unwrap()
            .is_empty());
        assert!(matches!(
            interior_points(&t, 0.0, FillSpacing::AtMost, &GeomCfg::default()),
            Err(GeomError::InvalidSpacing { .. })
        ));
        assert!(interior_points(&t, f64::NAN, FillSpacing::AtMost, &GeomCfg::default()).is_err());
    }

    #[test]
    fn fill_filters_against_ring() {
        let ring = vec![
            pt(0.0, 0.0),
            pt(0.0, 10.0),
            pt(3.0, 10.0),
            pt(3.0, 0.0),
            pt(0.0, 0.0),
        ];
        // Row spans wider than the ring; points beyond r = 3 are dropped.
        let t = table(&[(0.0, 0.0, 4.0), (5.0, 0.0, 8.0), (10.0, 0.0, 4.0)]);
        let pts = fill_locus(&ring, &t, 2.0, FillSpacing::AtMost, &GeomCfg::default()).unwrap();
        assert_eq!(pts, vec![pt(2.0, 5.0)]);
    }

    #[test]
    fn tiny_spacing_is_rejected_not_walked() {
        let t = table(&[
            (0.0, 1e6, 1e6 + 1.0),
            (5.0, 1e6, 1e6 + 1.0),
            (10.0, 1e6, 1e6 + 1.0),
        ]);
        // 1e-12 is below the float spacing at 1e6.
        assert!(matches!(
            interior_points(&t, 1e-12, FillSpacing::AtMost, &GeomCfg::default()),
            Err(GeomError::InvalidSpacing { .. })
        ));
        assert!(interior_points(&t, 1e-9, FillSpacing::AtLeast, &GeomCfg::default()).is_err());
        assert_eq!(step_count(0.0, 1.0, 0.5f64.powi(19), FillSpacing::AtMost), Some(524_288));
        assert_eq!(step_count(0.0, 1.0, 0.5f64.powi(20), FillSpacing::AtMost), None);
    }

    #[test]
    fn step_points_stay_below_row_end() {
        let t = table(&[(0.0, 0.0, 1.0), (5.0, 0.0, 1.0), (10.0, 0.0, 1.0)]);
        let pts = interior_points(&t, 0.1, FillSpacing::AtMost, &GeomCfg::default()).unwrap();
        assert_eq!(pts.len(), 9);
        assert!(pts.iter().all(|p| p.x > 0.0 && p.x < 1.0 && p.y == 5.0));
    }
}
