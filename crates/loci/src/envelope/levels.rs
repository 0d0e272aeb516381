//! Reactance level grid: uniformly spaced base levels plus every vertex
//! reactance that no base level already represents.

use crate::geom2::{round_to, GeomCfg};

/// Strategy mapping the scanned ring length to a base level count.
#[derive(Clone, Copy, Debug, Default)]
pub enum LevelCount {
    /// Always this many base levels.
    Fixed(usize),
    /// Visual-density ladder: <10 → 20, <20 → 16, <30 → 12, <40 → 8, else 7.
    #[default]
    Stepped,
    /// Caller-supplied function of the vertex count.
    Custom(fn(usize) -> usize),
}

impl LevelCount {
    /// Base level count for a ring of `vertices` points (closing point included).
    pub fn resolve(&self, vertices: usize) -> usize {
        match *self {
            LevelCount::Fixed(n) => n,
            LevelCount::Stepped => stepped(vertices),
            LevelCount::Custom(f) => f(vertices),
        }
    }
}

fn stepped(vertices: usize) -> usize {
    match vertices {
        0..=9 => 20,
        10..=19 => 16,
        20..=29 => 12,
        30..=39 => 8,
        _ => 7,
    }
}

/// Ascending reactance levels at which the envelope is sampled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelGrid {
    pub levels: Vec<f64>,
    /// How many entries came from the uniform base spacing.
    pub base: usize,
    /// How many entries were added for unmatched vertex reactances.
    pub added: usize,
}

impl LevelGrid {
    /// Build the grid for a closed ring's reactances.
    ///
    /// - Base: `levels` values, inclusive linspace over `[min, max]` (`1` gives
    ///   `[min]`, a zero span gives a single level).
    /// - Added: each distinct reactance after the first vertex (the first one
    ///   repeats as the closing point) whose rounding to `cfg.level_decimals`
    ///   matches no rounded base level.
    ///
    /// Values that differ beyond the rounding tolerance stay separate levels.
    pub fn build(reactances: &[f64], levels: usize, cfg: &GeomCfg) -> LevelGrid {
        let Some(&first) = reactances.first() else {
            return LevelGrid::default();
        };
        let (lo, hi) = reactances
            .iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        let base = linspace(lo, hi, levels);
        let rounded_base: Vec<f64> = base.iter().map(|&y| round_to(y, cfg.level_decimals)).collect();

        let mut added: Vec<f64> = Vec::new();
        for &x in &reactances[1..] {
            if added.contains(&x) {
                continue;
            }
            let key = round_to(x, cfg.level_decimals);
            if !rounded_base.contains(&key) {
                added.push(x);
            }
        }

        let (n_base, n_added) = (base.len(), added.len());
        let mut all = base;
        all.extend(added);
        all.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        LevelGrid {
            levels: all,
            base: n_base,
            added: n_added,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Inclusive linspace; a zero span collapses to one value.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 || stop == start {
        return vec![start];
    }
    let step = (stop - start) / (num - 1) as f64;
    (0..num).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_boundaries() {
        let s = LevelCount::Stepped;
        assert_eq!(s.resolve(0), 20);
        assert_eq!(s.resolve(9), 20);
        assert_eq!(s.resolve(10), 16);
        assert_eq!(s.resolve(19), 16);
        assert_eq!(s.resolve(20), 12);
        assert_eq!(s.resolve(29), 12);
        assert_eq!(s.resolve(30), 8);
        assert_eq!(s.resolve(39), 8);
        assert_eq!(s.resolve(40), 7);
        assert_eq!(s.resolve(400), 7);
    }

    #[test]
    fn fixed_and_custom_counts() {
        assert_eq!(LevelCount::Fixed(5).resolve(100), 5);
        fn double(n: usize) -> usize {
            2 * n
        }
        assert_eq!(LevelCount::Custom(double).resolve(6), 12);
    }

    #[test]
    fn linspace_inclusive() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(linspace(2.0, 4.0, 1), vec![2.0]);
        assert_eq!(linspace(2.0, 2.0, 4), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn square_grid_adds_nothing() {
        // Closed square: reactances 0, 10, 10, 0, 0 are all base levels.
        let xs = [0.0, 10.0, 10.0, 0.0, 0.0];
        let g = LevelGrid::build(&xs, 3, &GeomCfg::default());
        assert_eq!(g.levels, vec![0.0, 5.0, 10.0]);
        assert_eq!((g.base, g.added), (3, 0));
    }

    #[test]
    fn off_grid_vertices_are_added_once() {
        let xs = [0.0, 3.0, 10.0, 3.0, 7.5, 0.0];
        let g = LevelGrid::build(&xs, 3, &GeomCfg::default());
        assert_eq!(g.levels, vec![0.0, 3.0, 5.0, 7.5, 10.0]);
        assert_eq!(g.added, 2);
    }

    #[test]
    fn first_vertex_is_skipped() {
        // Open ring whose first reactance appears nowhere else.
        let xs = [1.0, 0.0, 10.0];
        let g = LevelGrid::build(&xs, 3, &GeomCfg::default());
        assert_eq!(g.levels, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn rounding_tolerance_matches_near_levels() {
        let xs = [0.0, 5.0 + 1e-12, 10.0, 0.0];
        let g = LevelGrid::build(&xs, 3, &GeomCfg::default());
        assert_eq!(g.len(), 3);
        let xs = [0.0, 5.0 + 1e-6, 10.0, 0.0];
        let g = LevelGrid::build(&xs, 3, &GeomCfg::default());
        assert_eq!(g.len(), 4);
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        assert!(LevelGrid::build(&[], 20, &GeomCfg::default()).is_empty());
    }
}
