//! Reproducible random primitives.
//!
//! Purpose
//! - Feed unit tests, benches and the `pencil_walk` example with random
//!   circles, lines and points drawn from one configurable window.
//!
//! Model
//! - Centers and points are uniform in `[-half_extent, half_extent]²`, radii
//!   uniform in `[radius_min, radius_max]`, orientation CCW with probability
//!   `ccw_probability`. Lines pass through a random point with a uniform
//!   direction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `primitives::{Circle, Line, Point}`, `conformal::GeneralizedCircle`.

use crate::conformal::GeneralizedCircle;
use crate::primitives::{Circle, CircleOrLine, Line, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub half_extent: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Probability of a CCW circle. Clamped to [0, 1].
    pub ccw_probability: f64,
    /// Fraction of `draw_circle_or_line` draws that are lines. Clamped to [0, 1].
    pub line_fraction: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            half_extent: 5.0,
            radius_min: 0.25,
            radius_max: 4.0,
            ccw_probability: 0.5,
            line_fraction: 0.2,
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
    pub fn to_std_rng(self) -> StdRng {
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

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

pub fn sample_point<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> Point {
    let h = cfg.half_extent.abs().max(1e-9);
    Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
}

pub fn sample_circle<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> Circle {
    let center = sample_point(cfg, rng);
    let lo = cfg.radius_min.max(1e-3);
    let hi = cfg.radius_max.max(lo);
    let radius = rng.gen_range(lo..=hi);
    let is_ccw = rng.gen_bool(cfg.ccw_probability.clamp(0.0, 1.0));
    // finite center and radius >= 1e-3 always validate
    Circle {
        x: center.x,
        y: center.y,
        radius,
        is_ccw,
    }
}

pub fn sample_line<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> Line {
    let through = sample_point(cfg, rng);
    let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    // unit normal (cos θ, sin θ), through the sampled point
    let (a, b) = (theta.cos(), theta.sin());
    Line::raw(a, b, -(a * through.x + b * through.y))
}

pub fn sample_circle_or_line<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> CircleOrLine {
    if rng.gen_bool(cfg.line_fraction.clamp(0.0, 1.0)) {
        sample_line(cfg, rng).into()
    } else {
        sample_circle(cfg, rng).into()
    }
}

/// Draw one point.
pub fn draw_point(cfg: SampleCfg, tok: ReplayToken) -> Point {
    sample_point(&cfg, &mut tok.to_std_rng())
}

/// Draw one circle.
pub fn draw_circle(cfg: SampleCfg, tok: ReplayToken) -> Circle {
    sample_circle(&cfg, &mut tok.to_std_rng())
}

/// Draw one line.
pub fn draw_line(cfg: SampleCfg, tok: ReplayToken) -> Line {
    sample_line(&cfg, &mut tok.to_std_rng())
}

/// Draw `n` circles or lines from one token.
pub fn draw_circles_or_lines(cfg: SampleCfg, tok: ReplayToken, n: usize) -> Vec<CircleOrLine> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| sample_circle_or_line(&cfg, &mut rng)).collect()
}

/// Draw one circle or line, upcast and normalized preserving direction.
pub fn draw_generalized_circle(cfg: SampleCfg, tok: ReplayToken) -> GeneralizedCircle {
    let c = sample_circle_or_line(&cfg, &mut tok.to_std_rng());
    GeneralizedCircle::from_circle_or_line(&c)
}
