//! Envelope extraction: per-level min/max resistance of a closed locus.
//!
//! Purpose
//! - Turn a vertex list into an `EnvelopeTable`: order the ring, build the
//!   level grid from its reactances, scan every level against the edges.
//! - Provide interior fill points derived from an envelope.
//!
//! Pipeline
//! - `VertexOrder::AsGiven` keeps the input order and only closes the ring
//!   (safe for concave loci); `VertexOrder::Clockwise` re-sorts around the
//!   centroid (convex / star-shaped loci only).
//! - Level count comes from `LevelCount` applied to the ring length.
//! - Levels are independent; the scan is O(levels × vertices).
//!
//! Code cross-refs: `geom2::{sort_clockwise, Locus, GeomCfg}`, `levels::LevelGrid`,
//! `scan::min_max_at_height`

mod fill;
mod levels;
mod scan;
mod table;

pub use fill::{fill_locus, interior_points, FillSpacing, MAX_FILL_STEPS};
pub use levels::{LevelCount, LevelGrid};
pub use scan::min_max_at_height;
pub use table::{column_headers, EnvelopeRow, EnvelopeTable, RangeTag, Unit};

use crate::geom2::{GeomCfg, Locus, Point};

/// How input vertices become the scanned ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VertexOrder {
    /// Keep the given order; append the first vertex if the ring is open.
    #[default]
    AsGiven,
    /// Sort clockwise around the centroid and close.
    Clockwise,
}

/// Envelope pipeline configuration.
#[derive(Clone, Copy, Debug)]
pub struct EnvelopeCfg {
    pub level_count: LevelCount,
    /// Decimal places applied when records are handed to a reporting layer.
    pub decimals: i32,
    pub unit: Unit,
    pub order: VertexOrder,
    pub geom: GeomCfg,
}

impl Default for EnvelopeCfg {
    fn default() -> Self {
        Self {
            level_count: LevelCount::Stepped,
            decimals: 5,
            unit: Unit::Ohm,
            order: VertexOrder::AsGiven,
            geom: GeomCfg::default(),
        }
    }
}

impl EnvelopeCfg {
    /// The ring that `extract_envelope` scans for these vertices.
    pub fn ring(&self, points: &[Point]) -> Locus {
        let locus = Locus::new(points.to_vec());
        match self.order {
            VertexOrder::AsGiven => locus.closed(),
            VertexOrder::Clockwise => locus.to_clockwise(),
        }
    }
}

/// Envelope table of a locus.
///
/// Never fails: fewer than 3 distinct vertices, or levels the boundary does
/// not reach, produce `(+∞, −∞)` rows that `EnvelopeTable::hits` filters out.
pub fn extract_envelope(points: &[Point], range: RangeTag, cfg: &EnvelopeCfg) -> EnvelopeTable {
    let ring = cfg.ring(points);
    envelope_of_ring(&ring, range, cfg)
}

/// Envelope of an already prepared (closed) ring.
pub fn envelope_of_ring(ring: &Locus, range: RangeTag, cfg: &EnvelopeCfg) -> EnvelopeTable {
    if ring.distinct_count() < 3 {
        tracing::warn!(
            range = %range,
            distinct = ring.distinct_count(),
            "locus has fewer than 3 distinct vertices; envelope is degenerate"
        );
    }
    let levels = cfg.level_count.resolve(ring.len());
    let grid = LevelGrid::build(&ring.reactances(), levels, &cfg.geom);
    let rows: Vec<EnvelopeRow> = grid
        .levels
        .iter()
        .map(|&level| {
            let (r_min, r_max) = min_max_at_height(&ring.verts, level, cfg.geom.eps_cross);
            EnvelopeRow { level, r_min, r_max }
        })
        .collect();
    tracing::debug!(
        range = %range,
        vertices = ring.len(),
        base = grid.base,
        added = grid.added,
        "envelope levels built"
    );
    EnvelopeTable {
        range,
        rows,
        base_levels: grid.base,
    }
}
