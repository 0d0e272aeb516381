//! Horizontal scan line vs. ring edges.

use crate::geom2::Point;

/// Minimum and maximum resistance where the ring boundary crosses `x = height`.
///
/// Walks consecutive edges without wrapping; the ring is expected pre-closed.
/// An edge crosses when `(x1-h)(x2-h) <= eps`. Sloped edges interpolate the
/// resistance; an edge lying flat on the scan line contributes only its start
/// point, so the far end of a horizontal span is not reported.
///
/// No crossing yields `(+∞, −∞)`.
pub fn min_max_at_height(verts: &[Point], height: f64, eps: f64) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for w in verts.windows(2) {
        let (a, b) = (w[0], w[1]);
        if (a.y - height) * (b.y - height) > eps {
            continue;
        }
        let r = if (a.y - b.y).abs() > eps {
            a.x + (b.x - a.x) * (height - a.y) / (b.y - a.y)
        } else {
            a.x
        };
        lo = lo.min(r);
        hi = hi.max(r);
    }
    (lo, hi)
}
