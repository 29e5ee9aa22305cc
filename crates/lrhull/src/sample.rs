//! Reproducible point inputs for hull experiments.
//!
//! Purpose
//! - Seeded point clouds (uniform box, integer lattice, near-collinear band)
//!   and insertion-order shuffles, keyed by a replay token `(seed, index)`.
//! - The fixed six-point input on which the naive predicate builds a
//!   non-convex hull.
//!
//! Lattice clouds contain many exactly collinear triples; band clouds contain
//! many nearly collinear ones. Both are where the two predicates part ways.

use crate::Point;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on both halves.
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

/// Shape of a random cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudKind {
    /// Uniform in `[-half_width, half_width]²`.
    UniformBox { half_width: f64 },
    /// Integer points in `[0, side]²`.
    Lattice { side: u32 },
    /// `x = i / count`, `y = 0.5 + eps·u` with `u ∈ [0, 1)`, in index order.
    NearCollinearBand { eps: f64 },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub kind: CloudKind,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            kind: CloudKind::UniformBox { half_width: 1.0 },
        }
    }
}

/// Draw a cloud; the same `(cfg, tok)` always gives the same points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count;
    match cfg.kind {
        CloudKind::UniformBox { half_width } => {
            let w = half_width.abs().max(f64::MIN_POSITIVE);
            (0..n)
                .map(|_| Point::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)))
                .collect()
        }
        CloudKind::Lattice { side } => (0..n)
            .map(|_| {
                Point::new(
                    f64::from(rng.gen_range(0..=side)),
                    f64::from(rng.gen_range(0..=side)),
                )
            })
            .collect(),
        CloudKind::NearCollinearBand { eps } => (0..n)
            .map(|i| Point::new(i as f64 / n as f64, 0.5 + eps * rng.gen::<f64>()))
            .collect(),
    }
}

/// A seeded permutation of `points`.
pub fn shuffled(points: &[Point], tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let mut out = points.to_vec();
    out.shuffle(&mut rng);
    out
}

/// Six points on which the naive predicate yields a non-convex hull: two of
/// them sit within a few ulps of the line through (6, 6) and (24, 24).
pub fn fragile_demo_points() -> [Point; 6] {
    [
        Point::new(24.00000000000005, 24.000000000000053),
        Point::new(54.85, 6.0),
        Point::new(24.000000000000068, 24.000000000000071),
        Point::new(54.850000000000357, 61.000000000000121),
        Point::new(24.0, 6.0),
        Point::new(6.0, 6.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg::default();
        let tok = ReplayToken::new(42, 7);
        assert_eq!(draw_cloud(cfg, tok), draw_cloud(cfg, tok));
        assert_ne!(draw_cloud(cfg, tok), draw_cloud(cfg, ReplayToken::new(42, 8)));
        assert!(draw_cloud(cfg, tok)
            .iter()
            .all(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0));
    }

    #[test]
    fn lattice_and_band_shapes() {
        let lattice = draw_cloud(
            CloudCfg {
                count: 100,
                kind: CloudKind::Lattice { side: 4 },
            },
            ReplayToken::new(1, 0),
        );
        assert_eq!(lattice.len(), 100);
        assert!(lattice
            .iter()
            .all(|p| p.x.fract() == 0.0 && (0.0..=4.0).contains(&p.x) && (0.0..=4.0).contains(&p.y)));

        let band = draw_cloud(
            CloudCfg {
                count: 10,
                kind: CloudKind::NearCollinearBand { eps: 1e-6 },
            },
            ReplayToken::new(1, 0),
        );
        for (i, p) in band.iter().enumerate() {
            assert_eq!(p.x, i as f64 / 10.0);
            assert!(p.y >= 0.5 && p.y < 0.5 + 1e-6);
        }
    }

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let pts = draw_cloud(CloudCfg::default(), ReplayToken::new(3, 0));
        let tok = ReplayToken::new(9, 1);
        let a = shuffled(&pts, tok);
        assert_eq!(a, shuffled(&pts, tok));
        let key = |p: &Point| (p.x.to_bits(), p.y.to_bits());
        let mut x: Vec<_> = a.iter().map(key).collect();
        let mut y: Vec<_> = pts.iter().map(key).collect();
        x.sort_unstable();
        y.sort_unstable();
        assert_eq!(x, y);
    }
}
