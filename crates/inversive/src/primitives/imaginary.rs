//! Imaginary circles: conformal vectors with negative squared radius.
//!
//! They bound no real region and carry no orientation; they show up as results
//! of `perp3` / pencil constructions on disjoint inputs.

use super::{Circle, Point, Transform2};
use crate::error::{GeomError, Result};

/// Circle with real center `(x, y)` and imaginary radius `i·radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImaginaryCircle {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) radius: f64,
}

impl ImaginaryCircle {
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self> {
        if x.is_finite() && y.is_finite() && radius.is_finite() && radius > 0.0 {
            Ok(Self { x, y, radius })
        } else {
            Err(GeomError::InvalidImaginaryCircle { x, y, radius })
        }
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
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn center_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same-center CCW real circle; for display and selection only.
    pub fn to_real_circle(&self) -> Circle {
        Circle {
            x: self.x,
            y: self.y,
            radius: self.radius,
            is_ccw: true,
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> ImaginaryCircle {
        ImaginaryCircle {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn scaled(&self, focus_x: f64, focus_y: f64, zoom: f64) -> Result<ImaginaryCircle> {
        ImaginaryCircle::new(
            (self.x - focus_x) * zoom + focus_x,
            (self.y - focus_y) * zoom + focus_y,
            zoom * self.radius,
        )
    }

    pub fn rotated(&self, focus_x: f64, focus_y: f64, angle: f64) -> ImaginaryCircle {
        let (sin, cos) = angle.sin_cos();
        let x0 = self.x - focus_x;
        let y0 = self.y - focus_y;
        ImaginaryCircle {
            x: x0 * cos - y0 * sin + focus_x,
            y: x0 * sin + y0 * cos + focus_y,
            ..*self
        }
    }

    pub fn transformed(&self, t: &Transform2) -> Result<ImaginaryCircle> {
        let (x, y) = t.apply_xy(self.x, self.y);
        let radius = match t.focus {
            Some(_) => t.zoom * self.radius,
            None => self.radius,
        };
        ImaginaryCircle::new(x, y, radius)
    }
}
