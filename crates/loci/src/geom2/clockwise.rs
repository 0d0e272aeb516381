//! Clockwise canonicalization by centroid angle.
//!
//! Preconditions
//! - Correct only for point sets that are star-shaped with respect to their
//!   arithmetic-mean centroid (every convex polygon qualifies). Concave input
//!   may come out in a self-intersecting order; callers that hold a correctly
//!   ordered concave ring should keep its order and only close it
//!   (`Locus::closed`).
//! - Points at equal angle keep their input order (stable sort); truly
//!   collinear-from-centroid points are not disambiguated.

use super::types::Point;
use super::util::{angle_from, centroid};

/// Sort by descending polar angle around the centroid (clockwise in an x-right,
/// y-up plane) and append the first sorted point to close the ring.
///
/// Empty input returns an empty ring; a single point comes back twice.
pub fn sort_clockwise(points: &[Point]) -> Vec<Point> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Point)> = points.iter().map(|&p| (angle_from(c, p), p)).collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    let mut ring: Vec<Point> = keyed.into_iter().map(|(_, p)| p).collect();
    ring.push(ring[0]);
    ring
}
