//! Rotor engine: bivectors and rotors of 2D conformal geometric algebra.
//!
//! Purpose
//! - Build bivectors from pairs of generalized circles (outer product, pencil),
//!   exponentiate them into rotors and apply rotors by the sandwich product.
//! - Motions built on top (inversion, bisectors, bi-inversion, loxodromic
//!   shift) live in `motions`.
//!
//! Basis
//! - `e_x`, `e_y`, `e_+`, `e_-` with `e_+² = 1`, `e_-² = −1`. A bivector is
//!   `xy·e_x∧e_y + xp·e_x∧e_+ + xm·e_x∧e_- + yp·e_y∧e_+ + ym·e_y∧e_- + pm·e_+∧e_-`.
//!
//! Precondition
//! - Terms are cubic in the input magnitudes; rescale geometry into roughly
//!   `[-10, 10]` before using this module.
//!
//! References
//! - Dorst, Fontijne, Mann, "Geometric Algebra for Computer Science", §7 and p. 185 (exp).

use std::ops::{Mul, Neg};

use crate::cfg::{EPSILON, EPSILON2, ROTOR_SATURATION_NORM};
use crate::conformal::{CirclePencilType, GeneralizedCircle};

mod motions;

pub use motions::invert;

/// Pure grade-2 element.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bivector {
    pub xy: f64,
    pub xp: f64,
    pub xm: f64,
    pub yp: f64,
    pub ym: f64,
    pub pm: f64,
}

impl Bivector {
    pub const ZERO: Bivector = Bivector {
        xy: 0.0,
        xp: 0.0,
        xm: 0.0,
        yp: 0.0,
        ym: 0.0,
        pm: 0.0,
    };

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Bivector::ZERO
    }

    /// `B·B̃`; negative for elliptic (rotation-like), positive for hyperbolic
    /// (dilation-like), zero for parabolic bivectors.
    #[inline]
    pub fn norm2(&self) -> f64 {
        -self.xy * self.xy - self.xp * self.xp + self.xm * self.xm - self.yp * self.yp
            + self.ym * self.ym
            + self.pm * self.pm
    }

    /// Divide by `√|norm²|`; near-null bivectors are returned unchanged.
    pub fn normalized(&self) -> Bivector {
        let n2 = self.norm2();
        if n2.abs() > EPSILON2 {
            *self * (1.0 / n2.abs().sqrt())
        } else {
            *self
        }
    }

    /// `B·I` with the pseudoscalar `I = e_x e_y e_+ e_-`.
    pub fn dual(&self) -> Bivector {
        Bivector {
            xy: self.pm,
            xp: -self.ym,
            xm: -self.yp,
            yp: self.xm,
            ym: self.xp,
            pm: -self.xy,
        }
    }

    /// `a ∧ b`.
    ///
    /// `exp(a ∧ b)` does not map `a` to `b`; the normalized bivector scaled by
    /// the inversive angle does, see [`Bivector::from_pencil`].
    pub fn from_outer_product(a: &GeneralizedCircle, b: &GeneralizedCircle) -> Bivector {
        let [w1, x1, y1, z1] = a.coords();
        let [w2, x2, y2, z2] = b.coords();
        Bivector {
            xy: -x2 * y1 + x1 * y2,
            xp: -w2 * x1 / 2.0 + w1 * x2 / 2.0 - x2 * z1 + x1 * z2,
            xm: w2 * x1 / 2.0 - w1 * x2 / 2.0 - x2 * z1 + x1 * z2,
            yp: -w2 * y1 / 2.0 + w1 * y2 / 2.0 - y2 * z1 + y1 * z2,
            ym: w2 * y1 / 2.0 - w1 * y2 / 2.0 - y2 * z1 + y1 * z2,
            pm: w2 * z1 - w1 * z2,
        }
    }

    /// Generator of the pencil of `a` and `b`, scaled so that `exp(result)`
    /// is the composition of the reflections in `a` then `b`. Zero when `a`
    /// and `b` coincide. Assumes normalization.
    pub fn from_pencil(a: &GeneralizedCircle, b: &GeneralizedCircle) -> Bivector {
        let bivector = -Bivector::from_outer_product(a, b);
        let d = a.inversive_distance(b);
        match a.pencil_type(b) {
            None => Bivector::ZERO,
            // |a∧b| = 0, so exp(a∧b) = 1 + a∧b
            Some(CirclePencilType::Parabolic) => bivector,
            Some(CirclePencilType::Elliptic) => bivector.normalized() * d.acos(),
            Some(CirclePencilType::Hyperbolic) => bivector.normalized() * d.abs().acosh(),
        }
    }

    /// Exponential map.
    ///
    /// Hyperbolic bivectors of norm above `ROTOR_SATURATION_NORM` produce a
    /// saturated rotor that sends everything to conformal infinity.
    pub fn exp(&self) -> Rotor {
        if self.is_zero() {
            return Rotor::IDENTITY;
        }
        let n2 = self.norm2();
        let n = n2.abs().sqrt();
        if n < EPSILON {
            // parabolic
            Rotor::new(1.0, *self)
        } else if n2 < 0.0 {
            Rotor::new(n.cos(), *self * (n.sin() / n))
        } else if n > ROTOR_SATURATION_NORM {
            Rotor::new(f64::INFINITY, *self)
        } else {
            Rotor::new(n.cosh(), *self * (n.sinh() / n))
        }
    }
}

impl Mul<f64> for Bivector {
    type Output = Bivector;
    fn mul(self, k: f64) -> Bivector {
        Bivector {
            xy: self.xy * k,
            xp: self.xp * k,
            xm: self.xm * k,
            yp: self.yp * k,
            ym: self.ym * k,
            pm: self.pm * k,
        }
    }
}

impl Neg for Bivector {
    type Output = Bivector;
    fn neg(self) -> Bivector {
        self * -1.0
    }
}

/// Scalar + bivector. Not necessarily unit, but `R·R̃` is a scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotor {
    pub s: f64,
    pub b: Bivector,
}

impl Rotor {
    pub const IDENTITY: Rotor = Rotor {
        s: 1.0,
        b: Bivector::ZERO,
    };

    #[inline]
    pub const fn new(s: f64, b: Bivector) -> Self {
        Self { s, b }
    }

    /// Result of exponentiating a huge hyperbolic bivector.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.s == f64::INFINITY
    }

    /// Scalar part of `R·R̃`.
    #[inline]
    pub fn norm2(&self) -> f64 {
        self.s * self.s + self.b.norm2()
    }

    pub fn normalized(&self) -> Rotor {
        let n2 = self.norm2();
        if n2.abs() > EPSILON2 {
            let k = 1.0 / n2.abs().sqrt();
            Rotor::new(self.s * k, self.b * k)
        } else {
            *self
        }
    }

    /// Reverse `R̃`: bivector part negated.
    pub fn reversed(&self) -> Rotor {
        Rotor::new(self.s, -self.b)
    }

    /// Sandwich `R·target·R̃`, keeping only the grade-1 part, normalized
    /// preserving direction.
    pub fn apply_to(&self, target: &GeneralizedCircle) -> GeneralizedCircle {
        if self.is_saturated() {
            return GeneralizedCircle::CONFORMAL_INFINITY;
        }
        let s = self.s;
        let Bivector {
            xy,
            xp,
            xm,
            yp,
            ym,
            pm,
        } = self.b;
        let [w, x, y, z] = target.coords();
        let x1 = pm * pm * x + pm * w * xm + pm * w * xp - 2.0 * pm * xm * z + 2.0 * pm * xp * z
            - s * s * x
            + s * w * xm
            + s * w * xp
            + 2.0 * s * xm * z
            - 2.0 * s * xp * z
            - 2.0 * s * xy * y
            + w * xy * ym
            + w * xy * yp
            - x * xm * xm
            + x * xp * xp
            + x * xy * xy
            + x * ym * ym
            - x * yp * yp
            - 2.0 * xm * y * ym
            + 2.0 * xp * y * yp
            + 2.0 * xy * ym * z
            - 2.0 * xy * yp * z;
        let y1 = pm * pm * y + pm * w * ym + pm * w * yp - 2.0 * pm * ym * z + 2.0 * pm * yp * z
            - s * s * y
            + s * w * ym
            + s * w * yp
            + 2.0 * s * x * xy
            + 2.0 * s * ym * z
            - 2.0 * s * yp * z
            - w * xm * xy
            - w * xp * xy
            - 2.0 * x * xm * ym
            + 2.0 * x * xp * yp
            + xm * xm * y
            - 2.0 * xm * xy * z
            - xp * xp * y
            + 2.0 * xp * xy * z
            + xy * xy * y
            - y * ym * ym
            + y * yp * yp;
        let plus = pm * pm * w / 2.0 - pm * pm * z + pm * s * w + 2.0 * pm * s * z
            - 2.0 * pm * x * xm
            - 2.0 * pm * y * ym
            + s * s * w / 2.0
            - s * s * z
            + 2.0 * s * x * xp
            + 2.0 * s * y * yp
            - w * xm * xm / 2.0
            - w * xm * xp
            - w * xp * xp / 2.0
            + w * xy * xy / 2.0
            - w * ym * ym / 2.0
            - w * ym * yp
            - w * yp * yp / 2.0
            - 2.0 * x * xy * yp
            + xm * xm * z
            - 2.0 * xm * xp * z
            + xp * xp * z
            + 2.0 * xp * xy * y
            - xy * xy * z
            + ym * ym * z
            - 2.0 * ym * yp * z
            + yp * yp * z;
        let minus = -pm * pm * w / 2.0 - pm * pm * z - pm * s * w + 2.0 * pm * s * z
            - 2.0 * pm * x * xp
            - 2.0 * pm * y * yp
            - s * s * w / 2.0
            - s * s * z
            + 2.0 * s * x * xm
            + 2.0 * s * y * ym
            - w * xm * xm / 2.0
            - w * xm * xp
            - w * xp * xp / 2.0
            - w * xy * xy / 2.0
            - w * ym * ym / 2.0
            - w * ym * yp
            - w * yp * yp / 2.0
            - 2.0 * x * xy * ym
            - xm * xm * z
            + 2.0 * xm * xp * z
            + 2.0 * xm * xy * y
            - xp * xp * z
            - xy * xy * z
            - ym * ym * z
            + 2.0 * ym * yp * z
            - yp * yp * z;
        GeneralizedCircle::raw(-(minus - plus), -x1, -y1, -(plus + minus) / 2.0)
            .normalized_preserving_direction()
    }
}

impl Mul<f64> for Rotor {
    type Output = Rotor;
    fn mul(self, k: f64) -> Rotor {
        Rotor::new(self.s * k, self.b * k)
    }
}

impl From<Bivector> for Rotor {
    fn from(b: Bivector) -> Self {
        Rotor::new(0.0, b)
    }
}

#[cfg(test)]
mod tests;
