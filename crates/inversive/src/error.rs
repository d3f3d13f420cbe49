//! Construction errors.
//!
//! Only malformed input is an error. Geometrically degenerate constructions
//! (no intersection, same-pencil triples, parallel bases) are reported as
//! `None` or an empty list by the operations themselves.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeomError {
    #[error("invalid Point({x}, {y}): coordinates must be both finite or both infinite")]
    InvalidPoint { x: f64, y: f64 },
    #[error("invalid Line({a}, {b}, {c}): coefficients must be finite with (a, b) != (0, 0)")]
    InvalidLine { a: f64, b: f64, c: f64 },
    #[error("invalid Circle({x}, {y}, {radius}, is_ccw = {is_ccw})")]
    InvalidCircle {
        x: f64,
        y: f64,
        radius: f64,
        is_ccw: bool,
    },
    #[error("invalid ImaginaryCircle({x}, {y}, {radius})")]
    InvalidImaginaryCircle { x: f64, y: f64, radius: f64 },
    #[error("invalid homogeneous coordinates ({w}, {x}, {y}, {z})")]
    InvalidHomogeneous { w: f64, x: f64, y: f64, z: f64 },
    #[error("points ({x1}, {y1}) and ({x2}, {y2}) nearly coincide, no line through them")]
    NearCoincidentPoints { x1: f64, y1: f64, x2: f64, y2: f64 },
}

pub type Result<T> = std::result::Result<T, GeomError>;
