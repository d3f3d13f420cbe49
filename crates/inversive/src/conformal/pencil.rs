//! Pencils of generalized circles and the triple constructions built on them.
//!
//! - `pencil_type`/`inversive_angle`: classify a pair by `d = A·B`.
//! - `perp3`: the generalized circle perpendicular to three given ones
//!   (circle through three points, circle perpendicular to three circles, ...).
//! - `parallel2perp1`: the member of the pencil `⟨c1, c2⟩` perpendicular to a
//!   third one (circle of a pencil through a point, ...).

use super::types::is_valid_homogeneous;
use super::GeneralizedCircle;
use crate::cfg::{EPSILON, EPSILON2};

/// Kind of the pencil spanned by two generalized circles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CirclePencilType {
    /// Lines through one common point, circles through two common points.
    Elliptic,
    /// Parallel lines, circles tangent to one line at one common point.
    Parabolic,
    /// Concentric circles, and everything perpendicular to a fixed elliptic pencil.
    Hyperbolic,
}

impl GeneralizedCircle {
    /// `None` when `self` and `other` are the same generalized circle (no pencil).
    /// Assumes normalization.
    pub fn pencil_type(&self, other: &GeneralizedCircle) -> Option<CirclePencilType> {
        if self.homogeneous_equals(other, EPSILON) {
            return None;
        }
        let d0 = self.inversive_distance(other).abs();
        Some(if (1.0 - d0).abs() < EPSILON {
            CirclePencilType::Parabolic
        } else if d0 < 1.0 {
            CirclePencilType::Elliptic
        } else {
            CirclePencilType::Hyperbolic
        })
    }

    /// In-pencil angle in radians: the oriented angle `acos d ∈ [0, π]` for
    /// elliptic pencils, the hyperbolic angle `acosh |d|` for hyperbolic ones,
    /// `0` for parabolic pencils and equal circles. Assumes normalization.
    pub fn inversive_angle(&self, other: &GeneralizedCircle) -> f64 {
        let d = self.inversive_distance(other);
        match self.pencil_type(other) {
            None | Some(CirclePencilType::Parabolic) => 0.0,
            Some(CirclePencilType::Elliptic) => d.acos(),
            Some(CirclePencilType::Hyperbolic) => d.abs().acosh(),
        }
    }

    /// Generalized circle perpendicular to `c1`, `c2` and `c3`; in CGA
    /// `c1 ∧ c2 ∧ c3`. For three points this is the circle (or line) through
    /// them; three collinear points give their line, not `None`. `None` only
    /// when the three lie in one pencil (e.g. concurrent lines). Assumes normalization.
    pub fn perp3(
        c1: &GeneralizedCircle,
        c2: &GeneralizedCircle,
        c3: &GeneralizedCircle,
    ) -> Option<GeneralizedCircle> {
        let GeneralizedCircle { w: w1, x: x1, y: y1, z: z1 } = *c1;
        let GeneralizedCircle { w: w2, x: x2, y: y2, z: z2 } = *c2;
        let GeneralizedCircle { w: w3, x: x3, y: y3, z: z3 } = *c3;
        // totally antisymmetric triple product
        let w = w1 * x2 * y3 - w1 * x3 * y2 - w2 * x1 * y3 + w2 * x3 * y1 + w3 * x1 * y2
            - w3 * x2 * y1;
        let x = -w1 * y2 * z3 + w1 * y3 * z2 + w2 * y1 * z3 - w2 * y3 * z1 - w3 * y1 * z2
            + w3 * y2 * z1;
        let y = w1 * x2 * z3 - w1 * x3 * z2 - w2 * x1 * z3 + w2 * x3 * z1 + w3 * x1 * z2
            - w3 * x2 * z1;
        let z = -x1 * y2 * z3 + x1 * y3 * z2 + x2 * y1 * z3 - x2 * y3 * z1 - x3 * y1 * z2
            + x3 * y2 * z1;
        finish(w, x, y, z)
    }

    /// Member of the pencil spanned by `c1` and `c2` that is perpendicular to
    /// `perp`; in CGA `!(c1 ∧ c2) ∧ perp`. Cubic in the inputs, so keep them
    /// in a moderate range. Assumes normalization.
    pub fn parallel2perp1(
        c1: &GeneralizedCircle,
        c2: &GeneralizedCircle,
        perp: &GeneralizedCircle,
    ) -> Option<GeneralizedCircle> {
        let GeneralizedCircle { w: w1, x: x1, y: y1, z: z1 } = *c1;
        let GeneralizedCircle { w: w2, x: x2, y: y2, z: z2 } = *c2;
        let GeneralizedCircle { w: w3, x: x3, y: y3, z: z3 } = *perp;
        let w = -w3 * w2 * z1 + w3 * w1 * z2 + w2 * x3 * x1 + w2 * y3 * y1 - w1 * x3 * x2
            - w1 * y3 * y2;
        let x = -w3 * x2 * z1 + w3 * x1 * z2 + w2 * x1 * z3 - w1 * x2 * z3 + x2 * y3 * y1
            - x1 * y3 * y2;
        let y = -w3 * y2 * z1 + w3 * y1 * z2 + w2 * y1 * z3 - w1 * y2 * z3 - x3 * x2 * y1
            + x3 * x1 * y2;
        let z = w2 * z3 * z1 - w1 * z3 * z2 - x3 * x2 * z1 + x3 * x1 * z2 - y3 * y2 * z1
            + y3 * y1 * z2;
        finish(w, x, y, z)
    }
}

fn finish(w: f64, x: f64, y: f64, z: f64) -> Option<GeneralizedCircle> {
    // zero or infinitely many solutions
    let near_zero =
        w.abs() < EPSILON2 && x.abs() < EPSILON2 && y.abs() < EPSILON2 && z.abs() < EPSILON2;
    if near_zero || !is_valid_homogeneous(w, x, y, z) {
        return None;
    }
    Some(GeneralizedCircle::raw(w, x, y, z).normalized_preserving_direction())
}
