//! 2D locus geometry (vertex rings in the R/X plane).
//!
//! Purpose
//! - Small, explicit primitives over `Vector2<f64>` rings: distance, perimeter,
//!   shoelace area, centroid angles, clockwise canonicalization, arc-length
//!   resampling and ray-casting containment.
//! - Tolerances live in `cfg` and travel through `GeomCfg`.
//!
//! Code cross-refs: `Locus`, `GeomCfg`, `crate::envelope`

pub mod cfg;
mod clockwise;
mod contain;
pub mod rand;
mod resample;
mod types;
mod util;

pub use clockwise::sort_clockwise;
pub use contain::{filter_inside, point_in_polygon};
pub use resample::resample_perimeter;
pub use types::{pt, GeomCfg, Locus, Point};
pub use util::{angle_from, centroid, convex_hull, distance, perimeter, polygon_area, round_to};
