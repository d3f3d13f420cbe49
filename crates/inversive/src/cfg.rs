//! Tolerance defaults for the inversive kernel.
//!
//! Policy
//! - Tolerances are fixed constants shared by every module; border, tangency and
//!   degeneracy decisions all go through them.
//! - The one empirically tuned threshold (clamping far points to infinity when
//!   converting back from the conformal model) is carried by `KernelCfg` so
//!   callers with different precision needs can override it.

/// Degeneracy / border band used by location queries and classification.
pub const EPSILON: f64 = 1e-6;
/// `EPSILON²`, used where squared quantities (radius², near-zero coordinates) are compared.
pub const EPSILON2: f64 = EPSILON * EPSILON;
/// Band within which two circles/lines are reported as touching at a single point.
pub const TANGENTIAL_TOUCH_EPSILON: f64 = 2.0 * EPSILON;
/// Single-precision counterpart of [`TANGENTIAL_TOUCH_EPSILON`].
pub const TANGENTIAL_TOUCH_EPSILON_F32: f32 = 2e-6;
/// Radius of the stand-in circle produced by the legacy `almost_a_line`.
pub const ALMOST_A_LINE_RADIUS: f64 = 10_000.0;
/// Squared distance from the origin beyond which a converted point is treated as infinity.
pub const FAR_POINT_D2: f64 = 1e12;
/// Hyperbolic bivector norm past which `exp` saturates to "send everything to infinity".
pub const ROTOR_SATURATION_NORM: f64 = 1e2;

/// Kernel configuration (tunable thresholds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelCfg {
    /// Points whose `x² + y²` exceeds this are clamped to conformal infinity by
    /// `GeneralizedCircle::to_gcircle_as_with`.
    pub far_point_d2: f64,
}

impl Default for KernelCfg {
    fn default() -> Self {
        Self {
            far_point_d2: FAR_POINT_D2,
        }
    }
}
