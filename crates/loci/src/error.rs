use thiserror::Error;

/// Failures of the geometry core.
///
/// Only operations that would otherwise divide by a derived length, or that
/// receive structurally broken tables, fail. Empty or flat loci are not errors:
/// area and envelope operations return degenerate values for them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("degenerate polygon: perimeter {perimeter} cannot be subdivided")]
    DegeneratePolygon { perimeter: f64 },

    #[error("invalid fill spacing {delta}: expected a finite value > 0 giving a bounded step count")]
    InvalidSpacing { delta: f64 },

    #[error("locus table has {columns} columns; expected (R, X) column pairs")]
    UnpairedColumn { columns: usize },

    #[error("missing or non-numeric range label in column {column}")]
    MissingRangeLabel { column: usize },
}

pub type GeomResult<T> = Result<T, GeomError>;
