use std::ops::{Add, Mul, Neg, Sub};

use crate::cfg::EPSILON;
use crate::error::{GeomError, Result};

/// Homogeneous 4-vector `(w, x, y, z)` of 2D conformal geometric algebra:
/// `w·e₀ + x·e_x + y·e_y + z·e_∞` in the null basis.
///
/// Upcasting
/// - Circle `(cx, cy, r, ccw)`: `w = ±1/r`, `x = w·cx`, `y = w·cy`,
///   `z = w·(cx² + cy² − r²)/2`.
/// - Line `a·x + b·y + c = 0`: `(0, a, b, −c)`.
/// - Point: `(1, x, y, (x² + y²)/2)`; infinity: `(0, 0, 0, 1)`.
///
/// Queries assume the receiver is normalized (`|norm²| ∈ {0, 1}`); call
/// [`GeneralizedCircle::normalized_preserving_direction`] after arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralizedCircle {
    pub(crate) w: f64,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl GeneralizedCircle {
    pub const CONFORMAL_INFINITY: GeneralizedCircle = GeneralizedCircle {
        w: 0.0,
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Rejects non-finite coordinates and the zero vector.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        if is_valid_homogeneous(w, x, y, z) {
            Ok(Self { w, x, y, z })
        } else {
            Err(GeomError::InvalidHomogeneous { w, x, y, z })
        }
    }

    #[inline]
    pub(crate) const fn raw(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }
    #[inline]
    pub fn coords(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        is_valid_homogeneous(self.w, self.x, self.y, self.z)
    }

    #[inline]
    pub fn e_plus_projection(&self) -> f64 {
        -self.w / 2.0 + self.z
    }

    #[inline]
    pub fn e_minus_projection(&self) -> f64 {
        self.w / 2.0 + self.z
    }

    /// `x² + y² − 2wz`: `0` for points, `(w·r)²` for circles.
    #[inline]
    pub fn norm2(&self) -> f64 {
        self.x * self.x + self.y * self.y - 2.0 * self.w * self.z
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm2().abs().sqrt()
    }

    /// Squared radius; `0` for infinity and `+∞` for lines. Assumes normalization.
    pub fn r2(&self) -> f64 {
        if self.w.abs() < EPSILON {
            if self.x.abs() < EPSILON && self.y.abs() < EPSILON {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            let x0 = self.x / self.w;
            let y0 = self.y / self.w;
            x0 * x0 + y0 * y0 - 2.0 * self.z / self.w
        }
    }

    /// Conformal inner product `x·x' + y·y' − z·w' − z'·w`.
    #[inline]
    pub fn scalar_product(&self, other: &GeneralizedCircle) -> f64 {
        self.x * other.x + self.y * other.y - self.z * other.w - other.z * self.w
    }

    /// `|d| < 1`: two common points, `|d| = 1`: tangent, `|d| > 1`: disjoint;
    /// `0` means perpendicular, negative means anti-parallel. Assumes normalization.
    #[inline]
    pub fn inversive_distance(&self, other: &GeneralizedCircle) -> f64 {
        self.scalar_product(other)
    }

    /// Canonical representative: `|norm| ∈ {0, 1}` and the first non-zero
    /// coordinate of `(w, x, y, z)` positive. Loses circle orientation.
    pub fn normalized(&self) -> GeneralizedCircle {
        let n = self.norm();
        if n.abs() < EPSILON {
            return if self.looks_like_infinity(n) {
                *self * (1.0 / self.z)
            } else {
                *self * (1.0 / self.w)
            };
        }
        let a = if (self.w / n).abs() < EPSILON {
            GeneralizedCircle { w: 0.0, ..*self } * (1.0 / n)
        } else {
            *self * (1.0 / n)
        };
        if a.w < 0.0
            || (a.w == 0.0 && a.x < 0.0)
            || (a.x == 0.0 && a.y < 0.0)
            || (a.y == 0.0 && a.z < 0.0)
        {
            -a
        } else {
            a
        }
    }

    /// Rescale to `|norm| ∈ {0, 1}` by a positive factor, so the sign of `w`
    /// (circle orientation) survives.
    pub fn normalized_preserving_direction(&self) -> GeneralizedCircle {
        let n = self.norm();
        if n < EPSILON {
            if self.looks_like_infinity(n) {
                let s = if self.w == 0.0 {
                    sign(self.z)
                } else {
                    sign(self.w) * sign(self.z)
                };
                GeneralizedCircle::raw(0.0, 0.0, 0.0, if s == 0.0 { 1.0 } else { s })
            } else {
                *self * (1.0 / self.w.abs())
            }
        } else if (self.w / n).abs() < EPSILON {
            GeneralizedCircle { w: 0.0, ..*self } * (1.0 / n)
        } else {
            *self * (1.0 / n)
        }
    }

    #[inline]
    fn looks_like_infinity(&self, n: f64) -> bool {
        (n == 0.0 && self.w.abs() < EPSILON) || (n != 0.0 && (self.w / n).abs() < EPSILON)
    }

    /// `self ≡ k·other` for some `k > 0`, compared by coordinate ratios.
    pub fn homogeneous_equals(&self, other: &GeneralizedCircle, epsilon: f64) -> bool {
        fn same(s: f64, o: f64, eps: f64) -> bool {
            (o == 0.0 && s.abs() < eps) || (o != 0.0 && (s / o - 1.0).abs() < eps)
        }
        same(self.w, other.w, epsilon)
            && same(self.x, other.x, epsilon)
            && same(self.y, other.y, epsilon)
            && same(self.z, other.z, epsilon)
    }

    /// `k·self + (1 − k)·other`; not normalized.
    pub fn affine_combination(&self, other: &GeneralizedCircle, k: f64) -> GeneralizedCircle {
        *self * k + *other * (1.0 - k)
    }

    /// Reflection (inversion) of `target` in `self`, normalized preserving direction.
    pub fn apply_to(&self, target: &GeneralizedCircle) -> GeneralizedCircle {
        let GeneralizedCircle { w, x, y, z } = *self;
        let GeneralizedCircle {
            w: w0,
            x: x0,
            y: y0,
            z: z0,
        } = *target;
        GeneralizedCircle::raw(
            -2.0 * w * w * z0 + 2.0 * w * x * x0 + 2.0 * w * y * y0 - w0 * x * x - w0 * y * y,
            -2.0 * w * x * z0 + 2.0 * w * x0 * z - 2.0 * w0 * x * z + x * x * x0 + 2.0 * x * y * y0
                - x0 * y * y,
            -2.0 * w * y * z0 + 2.0 * w * y0 * z - 2.0 * w0 * y * z - x * x * y0
                + 2.0 * x * x0 * y
                + y * y * y0,
            -2.0 * w0 * z * z - x * x * z0 + 2.0 * x * x0 * z - y * y * z0 + 2.0 * y * y0 * z,
        )
        .normalized_preserving_direction()
    }
}

impl Add for GeneralizedCircle {
    type Output = GeneralizedCircle;
    fn add(self, o: GeneralizedCircle) -> GeneralizedCircle {
        GeneralizedCircle::raw(self.w + o.w, self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for GeneralizedCircle {
    type Output = GeneralizedCircle;
    fn sub(self, o: GeneralizedCircle) -> GeneralizedCircle {
        GeneralizedCircle::raw(self.w - o.w, self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Neg for GeneralizedCircle {
    type Output = GeneralizedCircle;
    fn neg(self) -> GeneralizedCircle {
        GeneralizedCircle::raw(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for GeneralizedCircle {
    type Output = GeneralizedCircle;
    fn mul(self, k: f64) -> GeneralizedCircle {
        GeneralizedCircle::raw(self.w * k, self.x * k, self.y * k, self.z * k)
    }
}

/// `(0, 0, 0, 0)` and non-finite coordinates are not homogeneous coordinates.
#[inline]
pub(crate) fn is_valid_homogeneous(w: f64, x: f64, y: f64, z: f64) -> bool {
    w.is_finite()
        && x.is_finite()
        && y.is_finite()
        && z.is_finite()
        && (w != 0.0 || x != 0.0 || y != 0.0 || z != 0.0)
}

/// Sign with `sign(0) = 0`.
#[inline]
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
