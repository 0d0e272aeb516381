//! Random convex loci (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for convex impedance loci used by property tests,
//!   benches and demos. Draws are reproducible from a `(seed, index)` token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, then map the hull's bounding box onto
//!   the requested `LocusBox` in the R/X plane.
//!
//! Code cross-refs: `Locus`, `convex_hull`

use super::types::{pt, Locus, Point};
use super::util::convex_hull;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `1 + u`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            random_phase: true,
        }
    }
}

/// Target box of a drawn locus in the impedance plane.
#[derive(Clone, Copy, Debug)]
pub struct LocusBox {
    pub r_min: f64,
    pub r_max: f64,
    pub x_min: f64,
    pub x_max: f64,
}
impl Default for LocusBox {
    fn default() -> Self {
        Self {
            r_min: 0.5,
            r_max: 1.5,
            x_min: 6.0,
            x_max: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex locus (open ring, CCW hull order) fitted into `bx`.
///
/// Returns `None` if the hull collapses or the box has no extent.
pub fn draw_locus_radial(cfg: RadialCfg, bx: LocusBox, tok: ReplayToken) -> Option<Locus> {
    if !(bx.r_max > bx.r_min) || !(bx.x_max > bx.x_min) {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            Vector2::new(th.cos(), th.sin()) * (1.0 + u)
        })
        .collect();
    let hull = convex_hull(&pts)?;
    let (lo, hi) = hull.iter().fold(
        (Vector2::repeat(f64::INFINITY), Vector2::repeat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.inf(p), hi.sup(p)),
    );
    let span = hi - lo;
    if span.x <= 0.0 || span.y <= 0.0 {
        return None;
    }
    let verts = hull
        .into_iter()
        .map(|p| {
            let s = (p - lo).component_div(&span);
            pt(
                bx.r_min + s.x * (bx.r_max - bx.r_min),
                bx.x_min + s.y * (bx.x_max - bx.x_min),
            )
        })
        .collect();
    Some(Locus::new(verts))
}

/// Same vertices as `locus`, in a token-determined random order.
pub fn shuffled(locus: &Locus, tok: ReplayToken) -> Locus {
    let mut rng = tok.to_std_rng();
    let mut verts = locus.verts.clone();
    verts.shuffle(&mut rng);
    Locus::new(verts)
}
