//! Curated API surface for front ends (CLI, notebooks, reporting layers).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! underneath may move.

// Locus geometry
pub use crate::geom2::{
    angle_from, centroid, distance, filter_inside, perimeter, point_in_polygon, polygon_area, pt,
    resample_perimeter, sort_clockwise, GeomCfg, Locus, Point,
};
// Envelope pipeline
pub use crate::envelope::{
    column_headers, envelope_of_ring, extract_envelope, fill_locus, interior_points,
    min_max_at_height, EnvelopeCfg, EnvelopeRow, EnvelopeTable, FillSpacing, LevelCount,
    LevelGrid, RangeTag, Unit, VertexOrder,
};
// Tables
pub use crate::locus::LocusSet;
pub use crate::{GeomError, GeomResult};

/// Envelope tables for every range of a locus table, plus the vertex rings
/// they were scanned from (for renderers that overlay the boundary).
pub fn analyze(set: &LocusSet, cfg: &EnvelopeCfg) -> Vec<(Locus, EnvelopeTable)> {
    set.iter()
        .map(|(range, locus)| {
            let ring = cfg.ring(&locus.verts);
            let table = envelope_of_ring(&ring, *range, cfg);
            (ring, table)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_pairs_rings_with_tables() {
        let set = LocusSet {
            ranges: vec![RangeTag::new(2.0, 3.0)],
            loci: vec![Locus::from_pairs([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])],
        };
        let out = analyze(&set, &EnvelopeCfg::default());
        assert_eq!(out.len(), 1);
        let (ring, table) = &out[0];
        assert!(ring.is_closed());
        assert_eq!(table.range, RangeTag::new(2.0, 3.0));
        // 5 ring points → 20 base levels, no vertex levels added.
        assert_eq!(table.len(), 20);
        assert_eq!(table.misses(), 0);
    }
}
