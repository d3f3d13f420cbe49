//! Points of the extended (conformal) plane.
//!
//! - `Point`: finite `(x, y)` or the single point at infinity.
//! - `calculate_angle`: oriented angle between two rays from a common center.

use nalgebra::Vector2;

use super::Transform2;
use crate::error::{GeomError, Result};

/// Point `(x, y)`, or [`Point::CONFORMAL_INFINITY`] when both coordinates are infinite.
///
/// Equality is coordinate equality, except that any two infinite points compare equal.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Point {
    /// Stereographic image of the North pole; every line passes through it.
    pub const CONFORMAL_INFINITY: Point = Point {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };

    /// Unchecked constructor for values computed from already valid geometry.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Validating constructor: both coordinates finite, or both infinite (→ infinity).
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else if x.is_infinite() && y.is_infinite() {
            Ok(Self::CONFORMAL_INFINITY)
        } else {
            Err(GeomError::InvalidPoint { x, y })
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.x.is_infinite() && self.y.is_infinite()
    }

    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn distance_from(&self, point: &Point) -> f64 {
        match (self.is_infinity(), point.is_infinity()) {
            (true, true) => 0.0,
            (true, false) | (false, true) => f64::INFINITY,
            (false, false) => (point.x - self.x).hypot(point.y - self.y),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        if self.is_infinity() {
            return Self::CONFORMAL_INFINITY;
        }
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn scaled(&self, focus_x: f64, focus_y: f64, zoom: f64) -> Point {
        if self.is_infinity() {
            return Self::CONFORMAL_INFINITY;
        }
        Point::new(
            (self.x - focus_x) * zoom + focus_x,
            (self.y - focus_y) * zoom + focus_y,
        )
    }

    /// Rotation by `angle` (radians) around `(focus_x, focus_y)`.
    pub fn rotated(&self, focus_x: f64, focus_y: f64, angle: f64) -> Point {
        if self.is_infinity() {
            return Self::CONFORMAL_INFINITY;
        }
        let (sin, cos) = angle.sin_cos();
        let x0 = self.x - focus_x;
        let y0 = self.y - focus_y;
        Point::new(x0 * cos - y0 * sin + focus_x, x0 * sin + y0 * cos + focus_y)
    }

    pub fn transformed(&self, t: &Transform2) -> Point {
        if self.is_infinity() {
            return Self::CONFORMAL_INFINITY;
        }
        let (x, y) = t.apply_xy(self.x, self.y);
        Point::new(x, y)
    }

    /// `(self + point) / 2`; infinity absorbs.
    pub fn middle(&self, point: &Point) -> Point {
        if self.is_infinity() || point.is_infinity() {
            return Self::CONFORMAL_INFINITY;
        }
        Point::new((self.x + point.x) / 2.0, (self.y + point.y) / 2.0)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

/// Signed angle from `start` to `end` as seen from `center`, in `[-π, π]`.
/// Positive when turning from +x toward +y, which is clockwise on screen (y down).
pub fn calculate_angle(center: &Point, start: &Point, end: &Point) -> f64 {
    let v1 = start.coords() - center.coords();
    let v2 = end.coords() - center.coords();
    let cross = v1.x * v2.y - v1.y * v2.x;
    cross.atan2(v1.dot(&v2))
}
