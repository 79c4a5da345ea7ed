//! Random planar point sets (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic scatters for benches and property tests of the ring sorter.
//! - Points are returned shuffled so callers never get a pre-sorted ring.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter. Angular jitter stays below half the spacing, so angles
//!   remain distinct and the scatter is star-shaped around the origin.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ring::Point2;

/// Point count distribution.
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
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius, in the units of the output (metres for UTM).
    pub base_radius: f64,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 100.0,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Draw a star-shaped scatter around the origin, shuffled.
pub fn draw_points_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut pts: Vec<Point2> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    pts.shuffle(&mut rng);
    pts
}

/// Draw `n` points in convex position (on a circle of radius `radius`), shuffled.
pub fn draw_points_convex(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point2> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.3,
        radial_jitter: 0.0,
        base_radius: radius,
    };
    draw_points_radial(cfg, tok)
}

/// Shift every point by `offset` (e.g. into UTM easting/northing range).
pub fn translate(points: &[Point2], offset: Point2) -> Vec<Point2> {
    points.iter().map(|p| p + offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_token_is_deterministic() {
        let tok = ReplayToken::new(7, 3);
        let a = draw_points_radial(RadialCfg::default(), tok);
        let b = draw_points_radial(RadialCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_points_radial(RadialCfg::default(), ReplayToken::new(7, 4));
        assert_ne!(a, c);
    }

    #[test]
    fn vertex_count_is_respected() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 9 },
            ..RadialCfg::default()
        };
        for i in 0..20 {
            let pts = draw_points_radial(cfg, ReplayToken::new(1, i));
            assert!((5..=9).contains(&pts.len()));
        }
        let tiny = draw_points_convex(1, 1.0, ReplayToken::new(0, 0));
        assert_eq!(tiny.len(), 3);
    }

    #[test]
    fn convex_points_lie_on_circle() {
        let pts = draw_points_convex(16, 250.0, ReplayToken::new(11, 0));
        for p in &pts {
            assert!((p.norm() - 250.0).abs() < 1e-9);
        }
        let shifted = translate(&pts, Vector2::new(500_000.0, 9_800_000.0));
        assert!((shifted[0] - pts[0] - Vector2::new(500_000.0, 9_800_000.0)).norm() < 1e-6);
    }
}
