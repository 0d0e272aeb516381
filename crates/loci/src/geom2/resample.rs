//! Uniform arc-length resampling of a ring's boundary.

use super::types::Point;
use super::util::{distance, perimeter};
use crate::error::{GeomError, GeomResult};

/// Return `n` points spaced at equal arc length along the ring (wrapping
/// last→first), walking in the given traversal direction from `verts[0]`.
///
/// The first point lies one segment past `verts[0]`; the `n`-th lands back on
/// it. A carry-over remainder moves across vertices so exactly `n` points come
/// out even when segments straddle corners.
///
/// Errors with `DegeneratePolygon` when the perimeter is zero or non-finite.
pub fn resample_perimeter(verts: &[Point], n: usize) -> GeomResult<Vec<Point>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let total = perimeter(verts);
    if !total.is_finite() || total <= 0.0 {
        return Err(GeomError::DegeneratePolygon { perimeter: total });
    }
    let segment = total / n as f64;
    let m = verts.len();
    let mut out = Vec::with_capacity(n);
    let mut idx = 0usize;
    let mut carry = 0.0;
    while out.len() < n {
        let start = verts[idx];
        let next = (idx + 1) % m;
        let end = verts[next];
        let d = distance(start, end);
        let mut remaining = carry + d;
        // remaining >= segment > carry implies d > 0 here
        while remaining >= segment {
            remaining -= segment;
            let ratio = (d - remaining) / d;
            out.push(start + (end - start) * ratio);
            if out.len() == n {
                break;
            }
        }
        carry = remaining;
        idx = next;
    }
    Ok(out)
}
