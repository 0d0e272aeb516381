use nalgebra::Vector2;

use super::types::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Perimeter of a ring given in connecting order (wraps last→first).
///
/// A closed ring contributes a zero-length closing edge, so open and closed
/// forms of the same polygon have the same perimeter.
pub fn perimeter(verts: &[Point]) -> f64 {
    let n = verts.len();
    (0..n).map(|i| distance(verts[i], verts[(i + 1) % n])).sum()
}

/// Unsigned shoelace area over an ordered ring (wraps last→first).
///
/// Returns 0 for fewer than 3 vertices. Orientation is not reported.
pub fn polygon_area(verts: &[Point]) -> f64 {
    let n = verts.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        twice += p.x * q.y - p.y * q.x;
    }
    twice.abs() / 2.0
}

/// Arithmetic-mean centroid; `None` for an empty set.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Polar angle of `p` seen from `c`, in (-π, π].
#[inline]
pub fn angle_from(c: Point, p: Point) -> f64 {
    (p.y - c.y).atan2(p.x - c.x)
}

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(v: f64, decimals: i32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 2 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    (hull.len() >= 3).then_some(hull)
}

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
