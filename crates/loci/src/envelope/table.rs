//! Envelope rows, range tags and the exported table layout.
//!
//! Layout of an exported table (`to_records`):
//! - row 0: `[SENTINEL_MARKER, range.start, range.end]` (metadata, not geometry);
//! - rows 1..: `[level, r_min, r_max]` in ascending level order.

use std::fmt;

use crate::geom2::cfg::SENTINEL_MARKER;
use crate::geom2::round_to;

/// Coordinate unit of a locus table; only used for labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Ohm,
    PerUnit,
}

impl Unit {
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Ohm => "ohm",
            Unit::PerUnit => "pu",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pair of range labels carried through unchanged (e.g. harmonic orders 16.5–20.5).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeTag {
    pub start: f64,
    pub end: f64,
}

impl RangeTag {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Whole-number labels keep one decimal (`20.0`), matching the float labels
/// of existing `*_data_points` files.
struct Label(f64);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}

impl fmt::Display for RangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Label(self.start), Label(self.end))
    }
}

/// Resistance bounds of the boundary at one reactance level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopeRow {
    pub level: f64,
    pub r_min: f64,
    pub r_max: f64,
}

impl EnvelopeRow {
    /// False for the `(+∞, −∞)` no-crossing sentinel.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.r_min.is_finite() && self.r_max.is_finite()
    }

    #[inline]
    pub fn width(&self) -> Option<f64> {
        self.is_hit().then(|| self.r_max - self.r_min)
    }
}

/// Envelope of one locus, tagged with its source range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvelopeTable {
    pub range: RangeTag,
    pub rows: Vec<EnvelopeRow>,
    /// Base (uniform) levels in `rows`; the rest were added at vertex reactances.
    pub base_levels: usize,
}

impl EnvelopeTable {
    pub fn rows(&self) -> &[EnvelopeRow] {
        &self.rows
    }

    /// Rows where the scan line actually crosses the boundary.
    pub fn hits(&self) -> impl Iterator<Item = &EnvelopeRow> + '_ {
        self.rows.iter().filter(|r| r.is_hit())
    }

    /// Number of sentinel (no-crossing) rows.
    pub fn misses(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_hit()).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sentinel row first, then `[level, r_min, r_max]` per row.
    pub fn to_records(&self) -> Vec<[f64; 3]> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push([SENTINEL_MARKER, self.range.start, self.range.end]);
        out.extend(self.rows.iter().map(|r| [r.level, r.r_min, r.r_max]));
        out
    }

    /// `to_records` with every value rounded to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Vec<[f64; 3]> {
        self.to_records()
            .into_iter()
            .map(|rec| rec.map(|v| round_to(v, decimals)))
            .collect()
    }

    /// Output file stem used by reporting layers: `"{start}-{end}_data_points"`.
    pub fn file_stem(&self) -> String {
        format!("{}_data_points", self.range)
    }
}

/// Column headers for exported records: `X(unit)`, `R_min(unit)`, `R_max(unit)`.
pub fn column_headers(unit: Unit) -> [String; 3] {
    let u = unit.label();
    [format!("X({u})"), format!("R_min({u})"), format!("R_max({u})")]
}
