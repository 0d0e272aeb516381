//! Basic locus types and tolerances.
//!
//! - `Point`: `(r, x)` stored as `Vector2<f64>` (`.x` = R, `.y` = X).
//! - `GeomCfg`: level-match decimals and crossing epsilon.
//! - `Locus`: ordered vertex ring with closure helpers.

use nalgebra::Vector2;

use super::cfg::{CROSS_EPS, LEVEL_DECIMALS};
use super::util;

/// Point in the impedance plane: `x` holds resistance, `y` holds reactance.
pub type Point = Vector2<f64>;

/// Build a point from (resistance, reactance).
#[inline]
pub fn pt(r: f64, x: f64) -> Point {
    Vector2::new(r, x)
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Crossing test slack for the envelope scanner.
    pub eps_cross: f64,
    /// Rounding used to match vertex reactances against base levels.
    pub level_decimals: i32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_cross: CROSS_EPS,
            level_decimals: LEVEL_DECIMALS,
        }
    }
}

/// Ordered vertex ring of an impedance locus.
///
/// Invariants:
/// - Vertex order is the traversal order; no reordering happens implicitly.
/// - The ring may be open or closed; `closed()` returns the closed form that
///   envelope scanning expects (last point equal to the first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Locus {
    pub verts: Vec<Point>,
}

impl Locus {
    #[inline]
    pub fn new(verts: Vec<Point>) -> Self {
        Self { verts }
    }

    /// Build from `(r, x)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            verts: pairs.into_iter().map(|(r, x)| pt(r, x)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// True when the ring has at least two points and the last equals the first.
    pub fn is_closed(&self) -> bool {
        match (self.verts.first(), self.verts.last()) {
            (Some(a), Some(b)) => self.verts.len() > 1 && a == b,
            _ => false,
        }
    }

    /// Closed copy: appends the first vertex unless already closed. Empty stays empty.
    pub fn closed(&self) -> Locus {
        let mut verts = self.verts.clone();
        if let Some(&first) = verts.first() {
            if !self.is_closed() {
                verts.push(first);
            }
        }
        Locus { verts }
    }

    /// Clockwise, closed copy (centroid-angle sort). See `sort_clockwise` for preconditions.
    pub fn to_clockwise(&self) -> Locus {
        Locus {
            verts: super::sort_clockwise(&self.verts),
        }
    }

    /// Number of distinct vertices (exact comparison).
    pub fn distinct_count(&self) -> usize {
        let mut seen: Vec<Point> = Vec::with_capacity(self.verts.len());
        for v in &self.verts {
            if !seen.contains(v) {
                seen.push(*v);
            }
        }
        seen.len()
    }

    /// Reactance coordinates in vertex order.
    pub fn reactances(&self) -> Vec<f64> {
        self.verts.iter().map(|p| p.y).collect()
    }

    /// `(min, max)` reactance, or `None` when empty.
    pub fn reactance_span(&self) -> Option<(f64, f64)> {
        let first = self.verts.first()?;
        Some(
            self.verts
                .iter()
                .fold((first.y, first.y), |(lo, hi), p| (lo.min(p.y), hi.max(p.y))),
        )
    }

    #[inline]
    pub fn area(&self) -> f64 {
        util::polygon_area(&self.verts)
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        util::perimeter(&self.verts)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        super::point_in_polygon(p, &self.verts)
    }
}

impl From<Vec<Point>> for Locus {
    fn from(verts: Vec<Point>) -> Self {
        Self { verts }
    }
}
