//! Multi-range locus tables.
//!
//! A locus table holds one locus per range as an `(R, X)` column pair. The
//! first row carries the range labels (two per pair); vertex rows follow and
//! may be ragged (loci differ in vertex count, so columns end in blanks).

use crate::envelope::{extract_envelope, EnvelopeCfg, EnvelopeTable, RangeTag};
use crate::error::{GeomError, GeomResult};
use crate::geom2::{pt, Locus};

/// Loci paired with their range tags, in column order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocusSet {
    pub ranges: Vec<RangeTag>,
    pub loci: Vec<Locus>,
}

impl LocusSet {
    /// Build from column-major cells.
    ///
    /// - `labels[c]` is the first-row label of column `c`.
    /// - `columns[c]` holds the vertex cells below it; rows where either value
    ///   of a pair is missing or NaN are dropped.
    pub fn from_columns(labels: &[Option<f64>], columns: &[Vec<Option<f64>>]) -> GeomResult<Self> {
        if columns.len() % 2 != 0 {
            return Err(GeomError::UnpairedColumn {
                columns: columns.len(),
            });
        }
        let label = |c: usize| -> GeomResult<f64> {
            labels
                .get(c)
                .copied()
                .flatten()
                .filter(|v| v.is_finite())
                .ok_or(GeomError::MissingRangeLabel { column: c })
        };
        let mut set = LocusSet::default();
        for (k, pair) in columns.chunks_exact(2).enumerate() {
            let range = RangeTag::new(label(2 * k)?, label(2 * k + 1)?);
            let verts = pair[0]
                .iter()
                .zip(pair[1].iter())
                .filter_map(|(r, x)| match (r, x) {
                    (Some(r), Some(x)) if !r.is_nan() && !x.is_nan() => Some(pt(*r, *x)),
                    _ => None,
                })
                .collect();
            set.ranges.push(range);
            set.loci.push(Locus::new(verts));
        }
        Ok(set)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.loci.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RangeTag, &Locus)> + '_ {
        self.ranges.iter().zip(self.loci.iter())
    }

    /// Every locus sorted clockwise and closed; ranges unchanged.
    pub fn to_clockwise(&self) -> LocusSet {
        LocusSet {
            ranges: self.ranges.clone(),
            loci: self.loci.iter().map(Locus::to_clockwise).collect(),
        }
    }

    /// One envelope table per range, in column order.
    pub fn envelopes(&self, cfg: &EnvelopeCfg) -> Vec<EnvelopeTable> {
        self.iter()
            .map(|(range, locus)| extract_envelope(&locus.verts, *range, cfg))
            .collect()
    }

    /// Column-major cells for writing back: labels row plus `rows` vertex rows
    /// per column (`None` past a locus' end). Vertices beyond `rows` are cut.
    pub fn to_columns(&self, rows: usize) -> (Vec<f64>, Vec<Vec<Option<f64>>>) {
        let mut labels = Vec::with_capacity(2 * self.len());
        let mut columns = Vec::with_capacity(2 * self.len());
        for (range, locus) in self.iter() {
            labels.push(range.start);
            labels.push(range.end);
            let cell = |i: usize, f: fn(&crate::geom2::Point) -> f64| locus.verts.get(i).map(f);
            columns.push((0..rows).map(|i| cell(i, |p| p.x)).collect());
            columns.push((0..rows).map(|i| cell(i, |p| p.y)).collect());
        }
        (labels, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> (Vec<Option<f64>>, Vec<Vec<Option<f64>>>) {
        let labels = vec![Some(16.5), Some(20.5), Some(20.5), Some(24.5)];
        let cols = vec![
            vec![Some(0.63), Some(0.63), Some(0.74), Some(1.0), Some(1.0), Some(0.63)],
            vec![Some(6.99), Some(8.06), Some(8.81), Some(8.81), Some(6.99), Some(6.99)],
            vec![Some(0.63), Some(0.63), Some(0.85), Some(1.04), None, None],
            vec![Some(7.5), Some(8.06), Some(9.53), Some(9.53), None, Some(f64::NAN)],
        ];
        (labels, cols)
    }

    #[test]
    fn pairs_columns_and_drops_blank_cells() {
        let (labels, cols) = sample_columns();
        let set = LocusSet::from_columns(&labels, &cols).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.ranges, vec![RangeTag::new(16.5, 20.5), RangeTag::new(20.5, 24.5)]);
        assert_eq!(set.loci[0].len(), 6);
        assert_eq!(set.loci[1].len(), 4);
        assert_eq!(set.loci[1].verts[2], pt(0.85, 9.53));
    }

    #[test]
    fn rejects_odd_columns_and_missing_labels() {
        let (labels, mut cols) = sample_columns();
        cols.pop();
        assert_eq!(
            LocusSet::from_columns(&labels, &cols),
            Err(GeomError::UnpairedColumn { columns: 3 })
        );
        let (mut labels, cols) = sample_columns();
        labels[3] = None;
        assert_eq!(
            LocusSet::from_columns(&labels, &cols),
            Err(GeomError::MissingRangeLabel { column: 3 })
        );
    }

    #[test]
    fn envelopes_follow_column_order() {
        let (labels, cols) = sample_columns();
        let set = LocusSet::from_columns(&labels, &cols).unwrap();
        let tables = set.envelopes(&EnvelopeCfg::default());
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].range, RangeTag::new(16.5, 20.5));
        assert_eq!(tables[1].file_stem(), "20.5-24.5_data_points");
        assert!(tables.iter().all(|t| t.misses() == 0));
    }

    #[test]
    fn clockwise_round_trip_through_columns() {
        let (labels, cols) = sample_columns();
        let set = LocusSet::from_columns(&labels, &cols).unwrap().to_clockwise();
        assert!(set.loci.iter().all(Locus::is_closed));
        // Second locus: 4 vertices + closing point, padded to 6 rows.
        let (out_labels, out_cols) = set.to_columns(6);
        assert_eq!(out_labels, vec![16.5, 20.5, 20.5, 24.5]);
        assert_eq!(out_cols[2].iter().filter(|c| c.is_some()).count(), 5);
        assert_eq!(out_cols[3][5], None);
        // First locus: 6 input rows + closing point, cut at 6 rows.
        assert_eq!(out_cols[0].len(), 6);
    }
}
