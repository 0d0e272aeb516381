//! Tolerance defaults shared by the level-grid builder and the envelope scanner.
//!
//! Policy
//! - Defaults are fixed constants. The two values must stay consistent: a level
//!   that matches a vertex after rounding must also be crossed by that vertex's
//!   edges, otherwise levels get double-counted or missed.
//! - Callers that need other values go through `GeomCfg`, never through globals.

/// Decimal places used when comparing a vertex reactance with a base level
/// (equivalent to a 1e-10 equality tolerance).
pub const LEVEL_DECIMALS: i32 = 10;
/// Edge/scan-line crossing tolerance: `(x1-h)(x2-h) <= CROSS_EPS`.
pub const CROSS_EPS: f64 = 1e-9;
/// Marker stored in the first field of an envelope table's leading row.
pub const SENTINEL_MARKER: f64 = -9999.0;
