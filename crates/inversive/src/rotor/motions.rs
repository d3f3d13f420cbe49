//! Möbius motions expressed through rotors.
//!
//! All results are normalized preserving direction. Inputs are assumed
//! normalized (as produced by `GeneralizedCircle::from_gcircle`).

use super::Bivector;
use crate::cfg::EPSILON;
use crate::conformal::{CirclePencilType, GeneralizedCircle};
use crate::error::Result;
use crate::primitives::{CircleOrLine, GCircle};

/// Inversion of `target` in the circle `engine` (reflection when `engine` is a
/// line), for every kind of target. Fails only if the numbers blow up.
pub fn invert(engine: &CircleOrLine, target: &GCircle) -> Result<GCircle> {
    let engine = GeneralizedCircle::from_circle_or_line(engine).normalized_preserving_direction();
    let target = GeneralizedCircle::from_gcircle(target).normalized_preserving_direction();
    engine
        .apply_to(&target)
        .normalized_preserving_direction()
        .to_gcircle()
}

impl GeneralizedCircle {
    /// `index`-th of the `n_of_sections`-sectors of the pencil from `self` to
    /// `other`, `index = 0` being `self`. Continuous in both arguments; pass
    /// `-other` for the complementary n-sector.
    ///
    /// `None` for `n_of_sections = 0` or when `self + other` vanishes.
    pub fn bisector(
        &self,
        other: &GeneralizedCircle,
        n_of_sections: u32,
        index: u32,
    ) -> Option<GeneralizedCircle> {
        if n_of_sections == 0 {
            return None;
        }
        let fraction = index as f64 / n_of_sections as f64 - 0.5;
        let rotor = (Bivector::from_pencil(self, other) * (fraction / 2.0)).exp();
        // the sum also reaches the imaginary bisector of disjoint circles
        let target = *self + *other;
        if !target.is_valid() || target.coords().iter().all(|c| c.abs() < EPSILON) {
            return None;
        }
        Some(rotor.apply_to(&target))
    }

    /// Discrete n-sector selected by pencil type; `in_between` picks the
    /// sectors between `self` and `other` (elliptic pencils only).
    ///
    /// Not continuous in its arguments: the branch jumps when the sign of
    /// `self·other` or the pencil type changes. Prefer [`Self::bisector`] for
    /// interpolation. `None` for `n_of_sections = 0`.
    pub fn naive_bisector(
        &self,
        other: &GeneralizedCircle,
        n_of_sections: u32,
        index: u32,
        in_between: bool,
    ) -> Option<GeneralizedCircle> {
        if n_of_sections == 0 {
            return None;
        }
        let d = self.scalar_product(other);
        // relative direction of self wrt other
        let sign = if d >= 0.0 { 1.0 } else { -1.0 };
        let co_directed = d >= 0.0;
        let pencil = self.pencil_type(other);
        let max_parameter = match pencil {
            Some(CirclePencilType::Parabolic) => 1.0,
            Some(CirclePencilType::Elliptic) => {
                let in_between_sign = if in_between { -1.0 } else { 1.0 };
                (in_between_sign * d).acos()
            }
            Some(CirclePencilType::Hyperbolic) => d.abs().acosh(),
            None => 0.0,
        };
        let in_out_sign = match pencil {
            Some(CirclePencilType::Elliptic) if in_between == co_directed => -1.0,
            _ => 1.0,
        };
        let k = sign * in_out_sign * index as f64 / n_of_sections as f64 * max_parameter;
        let bivector = Bivector::from_outer_product(self, other).normalized();
        Some((bivector * (-k / 2.0)).exp().apply_to(self))
    }

    /// Composition of the inversions in `engine1` then `engine2`, applied
    /// `speed` times; fractional speeds interpolate from the identity.
    pub fn bi_inversion(
        &self,
        engine1: &GeneralizedCircle,
        engine2: &GeneralizedCircle,
        speed: f64,
    ) -> GeneralizedCircle {
        (Bivector::from_pencil(engine1, engine2) * speed)
            .exp()
            .apply_to(self)
    }

    /// Spiral similarity with fixed points `start` and `end` (points, or any
    /// pair spanning a pencil): rotation by `angle` around them, then dilation
    /// by `exp(log_dilation)` along their hyperbolic pencil. The two rotors commute.
    pub fn loxodromic_shift(
        &self,
        start: &GeneralizedCircle,
        end: &GeneralizedCircle,
        angle: f64,
        log_dilation: f64,
    ) -> GeneralizedCircle {
        let pencil = Bivector::from_outer_product(start, end).normalized();
        let rotation = (pencil.dual() * (-angle / 2.0)).exp();
        let dilation = (pencil * (log_dilation / 2.0)).exp();
        dilation.apply_to(&rotation.apply_to(self))
    }
}
