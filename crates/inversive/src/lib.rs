//! Inversive-geometry kernel of the extended plane.
//!
//! Points, oriented lines, oriented circles and imaginary circles, each in two
//! representations: oriented Euclidean primitives (`primitives`) for direct
//! queries and the homogeneous conformal model (`conformal`) for everything
//! Möbius. `intersect` solves pairwise intersections with a fixed entrance/exit
//! order; `rotor` builds inversions, pencil bisectors, bi-inversions and
//! loxodromic motions.
//!
//! Conventions
//! - Screen coordinates: the y axis points down. "CCW" means counter-clockwise
//!   as seen on screen.
//! - Every value is immutable; operations return new values. Nothing here logs,
//!   blocks or touches global state beyond the constants in `cfg`.
//!
//! API Policy
//! - Malformed input (non-finite numbers, zero radius, `(a, b) = (0, 0)`) is a
//!   `GeomError`. Geometrically empty answers are `None` or an empty `Vec`.

pub mod cfg;
pub mod conformal;
pub mod error;
pub mod intersect;
pub mod primitives;
pub mod rand;
pub mod rotor;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::KernelCfg;
pub use error::{GeomError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{KernelCfg, EPSILON, EPSILON2, TANGENTIAL_TOUCH_EPSILON};
    pub use crate::conformal::{CirclePencilType, GeneralizedCircle};
    pub use crate::error::{GeomError, Result};
    pub use crate::intersect::{
        calculate_intersection, intersection_coordinates_f32, intersection_points,
        CircleLineIntersection,
    };
    pub use crate::primitives::{
        calculate_angle, distance_between, Circle, CircleOrLine, CircleOrLineOrPoint, GCircle,
        ImaginaryCircle, Line, LocusWithOrder, Point, RegionPointLocation, Transform2,
    };
    pub use crate::rand::{ReplayToken, SampleCfg};
    pub use crate::rotor::{invert, Bivector, Rotor};
    pub use nalgebra::Vector2 as Vec2;
}
