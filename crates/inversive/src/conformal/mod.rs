//! Conformal (homogeneous) model of generalized circles.
//!
//! Purpose
//! - One normalized 4-vector type, `GeneralizedCircle`, into which every
//!   primitive upcasts, with algebraic invariants (norm, scalar product),
//!   normalization, pencil classification and lossless conversion back.
//!
//! Numeric policy
//! - Queries assume normalized receivers and never renormalize on their own;
//!   normalize right after `+`, `*` or `affine_combination`.
//! - Use `normalized_preserving_direction` whenever the result goes back to a
//!   `Circle`: the sign of `w` is the only carrier of orientation.
//!
//! Code cross-refs: `rotor::Rotor::apply_to`, `primitives::GCircle`.

mod convert;
mod pencil;
mod types;

pub use pencil::CirclePencilType;
pub use types::GeneralizedCircle;

#[cfg(test)]
mod tests;
