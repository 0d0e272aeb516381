//! Impedance-locus geometry: clockwise canonicalization, level grids and
//! min/max resistance envelopes of closed R/X polygons.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` with `p.x` = resistance (R) and
//!   `p.y` = reactance (X). Use [`pt`] to build them in (r, x) order.
//! - Every operation is a pure function of its inputs; nothing here performs I/O.
//! - Degenerate geometry yields degenerate values (zero area, sentinel rows)
//!   except where a division by a derived length would occur, which returns
//!   [`GeomError`].

pub mod api;
pub mod envelope;
pub mod error;
pub mod geom2;
pub mod locus;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, GeomResult};
pub use geom2::{pt, GeomCfg, Locus, Point};
pub use locus::LocusSet;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::envelope::{
        extract_envelope, EnvelopeCfg, EnvelopeRow, EnvelopeTable, FillSpacing, LevelCount,
        LevelGrid, RangeTag, Unit, VertexOrder,
    };
    pub use crate::geom2::{
        point_in_polygon, polygon_area, pt, resample_perimeter, sort_clockwise, GeomCfg, Locus,
        Point,
    };
    pub use crate::locus::LocusSet;
    pub use crate::{GeomError, GeomResult};
}
