//! Ray-casting containment (+x ray, odd/even parity).

use super::types::Point;

/// Classic crossing-parity test.
///
/// Walks every edge including the closing one. Edges lying horizontally at
/// `p.y` never toggle; vertical edges toggle whenever `p.x` is at or left of
/// them. Points exactly on the boundary may land either side.
pub fn point_in_polygon(p: Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut a = ring[0];
    for i in 1..=n {
        let b = ring[i % n];
        if p.y > a.y.min(b.y) && p.y <= a.y.max(b.y) && p.x <= a.x.max(b.x) {
            let x_cross = if a.y != b.y {
                (p.y - a.y) * (b.x - a.x) / (b.y - a.y) + a.x
            } else {
                a.x
            };
            if a.x == b.x || p.x <= x_cross {
                inside = !inside;
            }
        }
        a = b;
    }
    inside
}

/// Keep only the candidates that test inside `ring`.
pub fn filter_inside(ring: &[Point], candidates: &[Point]) -> Vec<Point> {
    candidates
        .iter()
        .copied()
        .filter(|&p| point_in_polygon(p, ring))
        .collect()
}
