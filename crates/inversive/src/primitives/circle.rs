//! Oriented circles.
//!
//! Conventions
//! - Screen coordinates: the y axis points down. "CCW" is counterclockwise as
//!   seen on screen, and order is `atan2(-(py - y), px - x)` (East = 0,
//!   North = π/2), negated for CW circles so that order always increases along
//!   the circle's own direction.
//! - Internal orientation CCW ⇔ the disk is the inside; CW ⇔ the complement of
//!   the disk is the inside. Every region query XORs with `is_ccw`.

use std::f64::consts::{PI, TAU};

use nalgebra::Complex;

use super::{CircleOrLine, Line, LocusWithOrder, Point, RegionPointLocation, Transform2};
use crate::cfg::{ALMOST_A_LINE_RADIUS, EPSILON};
use crate::error::{GeomError, Result};

/// Circle with center `(x, y)`, `radius > 0` and internal orientation `is_ccw`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) radius: f64,
    pub(crate) is_ccw: bool,
}

impl Circle {
    /// Rejects non-finite values and non-positive radii.
    pub fn new(x: f64, y: f64, radius: f64, is_ccw: bool) -> Result<Self> {
        if x.is_finite() && y.is_finite() && radius.is_finite() && radius > 0.0 {
            Ok(Self {
                x,
                y,
                radius,
                is_ccw,
            })
        } else {
            Err(GeomError::InvalidCircle {
                x,
                y,
                radius,
                is_ccw,
            })
        }
    }

    /// CCW circle (disk inside).
    #[inline]
    pub fn ccw(x: f64, y: f64, radius: f64) -> Result<Self> {
        Self::new(x, y, radius, true)
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
    pub fn is_ccw(&self) -> bool {
        self.is_ccw
    }
    #[inline]
    pub fn r2(&self) -> f64 {
        self.radius * self.radius
    }
    #[inline]
    pub fn center_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    fn with_center(&self, x: f64, y: f64) -> Circle {
        Circle { x, y, ..*self }
    }

    /// Nearest point of the circle. The center and infinity have no nearest
    /// point; they fall back to order 0.
    pub fn project(&self, point: &Point) -> Point {
        if (self.x == point.x && self.y == point.y) || point.is_infinity() {
            return self.order2point(0.0);
        }
        let vx = point.x - self.x;
        let vy = point.y - self.y;
        let v = vx.hypot(vy);
        Point::new(
            self.x + vx / v * self.radius,
            self.y + vy / v * self.radius,
        )
    }

    /// Distance to the boundary, `∞` for infinity.
    pub fn distance_from(&self, point: &Point) -> f64 {
        if point.is_infinity() {
            return f64::INFINITY;
        }
        ((point.x - self.x).hypot(point.y - self.y) - self.radius).abs()
    }

    #[inline]
    pub fn distance_between_centers(&self, circle: &Circle) -> f64 {
        (self.x - circle.x).hypot(self.y - circle.y)
    }

    /// Strict location; `Bordering` needs exact equality and is practically never returned.
    pub fn calculate_location(&self, point: &Point) -> RegionPointLocation {
        let distance = (point.x - self.x).hypot(point.y - self.y);
        if distance == self.radius {
            RegionPointLocation::Bordering
        } else if (distance < self.radius) == self.is_ccw {
            RegionPointLocation::In
        } else {
            RegionPointLocation::Out
        }
    }

    pub fn calculate_location_epsilon(&self, point: &Point) -> RegionPointLocation {
        if point.is_infinity() {
            return if self.is_ccw {
                RegionPointLocation::Out
            } else {
                RegionPointLocation::In
            };
        }
        let distance = (point.x - self.x).hypot(point.y - self.y);
        if (self.radius - distance).abs() < EPSILON {
            RegionPointLocation::Bordering
        } else if (distance < self.radius) == self.is_ccw {
            RegionPointLocation::In
        } else {
            RegionPointLocation::Out
        }
    }

    /// `(‖point − center‖ < radius) == is_ccw`; infinity is inside exactly the CW circles.
    #[inline]
    pub fn has_inside(&self, point: &Point) -> bool {
        self.has_inside_xy(point.x, point.y)
    }

    #[inline]
    pub fn has_inside_xy(&self, px: f64, py: f64) -> bool {
        let distance = (self.x - px).hypot(self.y - py);
        (distance < self.radius) == self.is_ccw
    }

    #[inline]
    pub fn has_outside(&self, point: &Point) -> bool {
        let distance = (self.x - point.x).hypot(self.y - point.y);
        (distance < self.radius) != self.is_ccw
    }

    pub fn has_inside_epsilon(&self, point: &Point) -> bool {
        let distance = (point.x - self.x).hypot(point.y - self.y);
        (self.radius - distance).abs() >= EPSILON && (distance < self.radius) == self.is_ccw
    }

    pub fn has_outside_epsilon(&self, point: &Point) -> bool {
        let distance = (point.x - self.x).hypot(point.y - self.y);
        (self.radius - distance).abs() >= EPSILON && (distance < self.radius) != self.is_ccw
    }

    #[inline]
    pub fn point2order_xy(&self, px: f64, py: f64) -> f64 {
        let order = (-py + self.y).atan2(px - self.x);
        if self.is_ccw {
            order
        } else {
            -order
        }
    }

    #[inline]
    pub fn order2point_x(&self, order: f64) -> f64 {
        let o = if self.is_ccw { order } else { -order };
        self.x + self.radius * o.cos()
    }

    #[inline]
    pub fn order2point_y(&self, order: f64) -> f64 {
        let o = if self.is_ccw { order } else { -order };
        self.y - self.radius * o.sin()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Circle {
        self.with_center(self.x + dx, self.y + dy)
    }

    /// Homothety around `(focus_x, focus_y)`; `zoom` must keep the radius positive.
    pub fn scaled(&self, focus_x: f64, focus_y: f64, zoom: f64) -> Result<Circle> {
        Circle::new(
            (self.x - focus_x) * zoom + focus_x,
            (self.y - focus_y) * zoom + focus_y,
            zoom * self.radius,
            self.is_ccw,
        )
    }

    /// Rotation by `angle` (radians) around `(focus_x, focus_y)`.
    pub fn rotated(&self, focus_x: f64, focus_y: f64, angle: f64) -> Circle {
        let (sin, cos) = angle.sin_cos();
        let x0 = self.x - focus_x;
        let y0 = self.y - focus_y;
        self.with_center(x0 * cos - y0 * sin + focus_x, x0 * sin + y0 * cos + focus_y)
    }

    pub fn transformed(&self, t: &Transform2) -> Result<Circle> {
        let (x, y) = t.apply_xy(self.x, self.y);
        let radius = match t.focus {
            Some(_) => t.zoom * self.radius,
            None => self.radius,
        };
        Circle::new(x, y, radius, self.is_ccw)
    }

    /// Same circle, opposite orientation.
    pub fn reversed(&self) -> Circle {
        Circle {
            is_ccw: !self.is_ccw,
            ..*self
        }
    }

    /// Tangent line at `project(point)`, directed along the circle.
    pub fn tangent_at(&self, point: &Point) -> Line {
        let base = self.project(point);
        let to_center_x = self.x - base.x;
        let to_center_y = self.y - base.y;
        let d = to_center_x.hypot(to_center_y);
        // a CCW circle lies to the left of (inside) its tangent
        let sign = if self.is_ccw { 1.0 } else { -1.0 };
        let a = sign * to_center_x / d;
        let b = sign * to_center_y / d;
        Line::raw(a, b, -a * base.x - b * base.y)
    }

    /// "⭗" case, anti-symmetric in args.
    pub fn is_in(&self, circle: &Circle) -> bool {
        self.distance_between_centers(circle) + self.radius <= circle.radius
    }

    /// "o o" case, symmetric in args.
    pub fn is_out_beside(&self, circle: &Circle) -> bool {
        self.distance_between_centers(circle) >= self.radius + circle.radius
    }

    /// Inclusion of inside regions `self ⊆ other`, keyed on both orientations.
    pub fn is_inside(&self, other: &CircleOrLine) -> bool {
        match other {
            CircleOrLine::Circle(circle) => match (self.is_ccw, circle.is_ccw) {
                (true, true) => self.is_in(circle),
                (true, false) => self.is_out_beside(circle),
                (false, true) => false,
                (false, false) => circle.is_in(self),
            },
            CircleOrLine::Line(line) => {
                self.is_ccw
                    && line.has_inside(&self.center_point())
                    && line.distance_from(&self.center_point()) >= self.radius
            }
        }
    }

    /// Disjointness of inside regions `self ⊆ otherᶜ`, keyed on both orientations.
    pub fn is_outside(&self, other: &CircleOrLine) -> bool {
        match other {
            CircleOrLine::Circle(circle) => match (self.is_ccw, circle.is_ccw) {
                (true, true) => self.is_out_beside(circle),
                (true, false) => self.is_in(circle),
                (false, true) => circle.is_in(self),
                (false, false) => false,
            },
            CircleOrLine::Line(line) => {
                self.is_ccw
                    && line.has_outside(&self.center_point())
                    && line.distance_from(&self.center_point()) >= self.radius
            }
        }
    }

    /// Tangent line to `self` closest to `screen_center`, used to draw huge
    /// circles that are indistinguishable from lines on screen.
    pub fn approximate_to_line(&self, screen_center: &Point) -> Line {
        let to_cx = self.x - screen_center.x;
        let to_cy = self.y - screen_center.y;
        let pc = to_cx.hypot(to_cy);
        if pc == 0.0 {
            return Line::raw(0.0, 1.0, -self.radius - screen_center.y);
        }
        let in_sign = if self.radius > pc { -1.0 } else { 1.0 };
        let radius_sign = if self.is_ccw { 1.0 } else { -1.0 };
        let nx = in_sign * to_cx / pc;
        let ny = in_sign * to_cy / pc;
        let direction_sign = radius_sign * in_sign;
        let rho = (pc - self.radius).abs();
        let p0x = screen_center.x + nx * rho;
        let p0y = screen_center.y + ny * rho;
        let c = -p0x * nx - p0y * ny;
        Line::raw(nx * direction_sign, ny * direction_sign, c * direction_sign)
    }

    /// Circumcircle of three points; collinear triples degrade to [`Circle::almost_a_line`].
    #[deprecated(note = "use GeneralizedCircle::perp3, which also yields lines and never fails")]
    #[allow(deprecated)]
    pub fn by_3_points(p1: &Point, p2: &Point, p3: &Point) -> Result<Circle> {
        if p1 == p2 {
            return Circle::almost_a_line(p1, p3);
        } else if p1 == p3 || p2 == p3 {
            return Circle::almost_a_line(p1, p2);
        }
        let z1 = Complex::new(p1.x, p1.y);
        let z2 = Complex::new(p2.x, p2.y);
        let z3 = Complex::new(p3.x, p3.y);
        let w = (z3 - z1) / (z2 - z1);
        if w.im.abs() <= EPSILON {
            return Circle::almost_a_line(p1, p2);
        }
        let c = (z2 - z1) * (w - w.norm_sqr()) / Complex::new(0.0, 2.0 * w.im) + z1;
        Circle::ccw(c.re, c.im, (z1 - c).norm())
    }

    /// A circle of radius `ALMOST_A_LINE_RADIUS` through `p1` and `p2`, its
    /// center offset from the midpoint by `+90°` of `p2 − p1`.
    #[deprecated(note = "represent lines as Line; this stand-in fails on near-coincident points")]
    pub fn almost_a_line(p1: &Point, p2: &Point) -> Result<Circle> {
        let z1 = Complex::new(p1.x, p1.y);
        let z2 = Complex::new(p2.x, p2.y);
        let v = z2 - z1;
        let length = v.norm();
        if !(length > EPSILON) {
            return Err(GeomError::NearCoincidentPoints {
                x1: p1.x,
                y1: p1.y,
                x2: p2.x,
                y2: p2.y,
            });
        }
        let center = (z1 + z2) / 2.0 + (v / length) * Complex::new(0.0, ALMOST_A_LINE_RADIUS);
        Circle::ccw(center.re, center.im, ALMOST_A_LINE_RADIUS)
    }
}

impl LocusWithOrder for Circle {
    /// CCW order in `[-π, π]` starting from the East.
    #[inline]
    fn point2order(&self, point: &Point) -> f64 {
        self.point2order_xy(point.x, point.y)
    }

    fn order2point(&self, order: f64) -> Point {
        Point::new(self.order2point_x(order), self.order2point_y(order))
    }

    fn order_in_between(&self, order1: f64, order2: f64) -> f64 {
        if order2 > order1 {
            order1 + (order2 - order1) / 2.0
        } else {
            // includes order1 == order2: the full loop
            order1 + (2.0 * PI - (order1 - order2)) / 2.0
        }
    }

    fn order_is_in_between(&self, start_order: f64, order: f64, end_order: f64) -> bool {
        let o = (order + TAU) % TAU;
        let start = (start_order + TAU) % TAU;
        let end = (end_order + TAU) % TAU;
        if self.is_ccw {
            if start <= end {
                start <= o && o <= end
            } else {
                // the arc contains order 0
                o >= start || o <= end
            }
        } else if end <= start {
            // CW order is reversed
            end <= o && o <= start
        } else {
            o >= end || o <= start
        }
    }
}
