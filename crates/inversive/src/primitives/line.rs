//! Oriented lines `a·x + b·y + c = 0`.
//!
//! Conventions
//! - The normal `(a, b)` points inside: `a·x + b·y + c > 0` is the inside region.
//! - The direction is the normal rotated by +90°: `(-b, a)/‖(a, b)‖`, so the
//!   inside lies to the left when walking along the line.
//! - Order along the line is the signed projection onto the direction; the point
//!   at infinity has order `-∞` and closes the line into a loop.

use nalgebra::Vector2;

use super::{CircleOrLine, LocusWithOrder, Point, RegionPointLocation, Transform2};
use crate::cfg::EPSILON;
use crate::error::{GeomError, Result};

/// Oriented line. Most algorithms expect `a² + b² ≈ 1`; use [`Line::normalized`]
/// after building from raw coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
}

impl Line {
    /// Rejects non-finite coefficients and a zero normal.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a.is_finite() && b.is_finite() && c.is_finite() && (a != 0.0 || b != 0.0) {
            Ok(Self { a, b, c })
        } else {
            Err(GeomError::InvalidLine { a, b, c })
        }
    }

    #[inline]
    pub(crate) const fn raw(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Line through `p1` and `p2`, directed from `p1` to `p2`, unit normal.
    pub fn by_2_points(p1: &Point, p2: &Point) -> Result<Self> {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let c = p1.y * dx - p1.x * dy;
        Ok(Line::new(dy, -dx, c)?.normalized())
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Unit normal, pointing inside.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        let n = self.norm();
        Vector2::new(self.a / n, self.b / n)
    }

    /// Unit direction vector.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        let n = self.norm();
        Vector2::new(-self.b / n, self.a / n)
    }

    /// Direction-preserving rescale to a unit normal.
    pub fn normalized(&self) -> Line {
        let n = self.norm();
        Line::raw(self.a / n, self.b / n, self.c / n)
    }

    /// Signed value `(a·x + b·y + c)/‖(a, b)‖`: positive inside.
    #[inline]
    fn signed_distance(&self, point: &Point) -> f64 {
        (self.a * point.x + self.b * point.y + self.c) / self.norm()
    }

    /// Orthogonal projection; infinity projects onto itself.
    pub fn project(&self, point: &Point) -> Point {
        if point.is_infinity() {
            return Point::CONFORMAL_INFINITY;
        }
        self.project_xy(point.x, point.y)
    }

    pub(crate) fn project_xy(&self, x: f64, y: f64) -> Point {
        let t = self.b * x - self.a * y;
        let n2 = self.a * self.a + self.b * self.b;
        Point::new(
            (self.b * t - self.a * self.c) / n2,
            (-self.a * t - self.b * self.c) / n2,
        )
    }

    pub fn distance_from(&self, point: &Point) -> f64 {
        if point.is_infinity() {
            return f64::INFINITY;
        }
        self.signed_distance(point).abs()
    }

    pub fn calculate_location(&self, point: &Point) -> RegionPointLocation {
        if point.is_infinity() {
            return RegionPointLocation::Bordering;
        }
        let t = self.a * point.x + self.b * point.y + self.c;
        if t > 0.0 {
            RegionPointLocation::In
        } else if t < 0.0 {
            RegionPointLocation::Out
        } else {
            RegionPointLocation::Bordering
        }
    }

    /// Three-way location with an `EPSILON` band around the line.
    /// Infinity lies on every line, hence it is always bordering.
    pub fn calculate_location_epsilon(&self, point: &Point) -> RegionPointLocation {
        if point.is_infinity() {
            return RegionPointLocation::Bordering;
        }
        let t = self.signed_distance(point);
        if t.abs() < EPSILON {
            RegionPointLocation::Bordering
        } else if t > 0.0 {
            RegionPointLocation::In
        } else {
            RegionPointLocation::Out
        }
    }

    #[inline]
    pub fn has_inside(&self, point: &Point) -> bool {
        self.calculate_location(point) == RegionPointLocation::In
    }

    #[inline]
    pub fn has_outside(&self, point: &Point) -> bool {
        self.calculate_location(point) == RegionPointLocation::Out
    }

    /// Parallel (or anti-parallel) normals.
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        let w = self.a * other.b - other.a * self.b;
        (w / self.norm() / other.norm()).abs() < EPSILON
    }

    /// Same underlying point set, orientation ignored.
    pub fn is_collinear_to(&self, other: &Line) -> bool {
        self.is_parallel_to(other) && other.distance_from(&self.order2point(0.0)) < EPSILON
    }

    /// Same oriented line: coefficients agree up to a positive factor.
    pub fn same_as(&self, other: &Line) -> bool {
        self.is_collinear_to(other) && self.normal().dot(&other.normal()) > 0.0
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Line {
        Line::raw(self.a, self.b, self.c - (self.a * dx + self.b * dy))
    }

    /// Homothety with center `(focus_x, focus_y)`; a negative `zoom` flips the orientation.
    pub fn scaled(&self, focus_x: f64, focus_y: f64, zoom: f64) -> Line {
        let at_focus = self.a * focus_x + self.b * focus_y;
        Line::raw(self.a, self.b, zoom * (at_focus + self.c) - at_focus)
    }

    /// Rotation by `angle` (radians) around `(focus_x, focus_y)`.
    pub fn rotated(&self, focus_x: f64, focus_y: f64, angle: f64) -> Line {
        let (sin, cos) = angle.sin_cos();
        let a = self.a * cos - self.b * sin;
        let b = self.a * sin + self.b * cos;
        let c = (self.a * focus_x + self.b * focus_y + self.c) - a * focus_x - b * focus_y;
        Line::raw(a, b, c)
    }

    pub fn transformed(&self, t: &Transform2) -> Line {
        let moved = self.translated(t.translation.x, t.translation.y);
        match t.focus {
            Some(f) => moved.rotated(f.x, f.y, t.angle).scaled(f.x, f.y, t.zoom),
            None => moved,
        }
    }

    /// Same line, opposite orientation (inside and outside swap).
    pub fn reversed(&self) -> Line {
        Line::raw(-self.a, -self.b, -self.c)
    }

    /// A line is its own tangent everywhere.
    pub fn tangent_at(&self, _point: &Point) -> Line {
        *self
    }

    /// Inclusion of inside regions: `self ⊆ other`.
    pub fn is_inside(&self, other: &CircleOrLine) -> bool {
        match other {
            CircleOrLine::Circle(circle) => {
                // a half-plane only fits into the outside of a disk
                !circle.is_ccw()
                    && self.has_outside(&circle.center_point())
                    && self.distance_from(&circle.center_point()) >= circle.radius()
            }
            CircleOrLine::Line(line) => {
                let l1 = self.normalized();
                let l2 = line.normalized();
                (l1.a - l2.a).abs() < EPSILON && (l1.b - l2.b).abs() < EPSILON && l1.c <= l2.c
            }
        }
    }

    /// Disjointness of inside regions: `self ⊆ otherᶜ`.
    pub fn is_outside(&self, other: &CircleOrLine) -> bool {
        match other {
            CircleOrLine::Circle(circle) => {
                circle.is_ccw()
                    && self.has_outside(&circle.center_point())
                    && self.distance_from(&circle.center_point()) >= circle.radius()
            }
            CircleOrLine::Line(line) => {
                let l1 = self.normalized();
                let l2 = line.normalized();
                (l1.a + l2.a).abs() < EPSILON && (l1.b + l2.b).abs() < EPSILON && l1.c <= -l2.c
            }
        }
    }
}

impl LocusWithOrder for Line {
    fn point2order(&self, point: &Point) -> f64 {
        if point.is_infinity() {
            return f64::NEG_INFINITY;
        }
        point.coords().dot(&self.direction())
    }

    fn order2point(&self, order: f64) -> Point {
        if order.is_infinite() {
            return Point::CONFORMAL_INFINITY;
        }
        let base = self.project_xy(0.0, 0.0);
        let v = self.direction();
        Point::new(base.x + v.x * order, base.y + v.y * order)
    }

    /// Midpoint of the directed segment `order1 → order2`. When `order2` comes
    /// first the segment passes through infinity, so any order past `order1` works.
    fn order_in_between(&self, order1: f64, order2: f64) -> f64 {
        if order1 == f64::NEG_INFINITY && order2 == f64::NEG_INFINITY {
            0.0
        } else if order1 == f64::NEG_INFINITY {
            order2 - 10.0
        } else if order2 == f64::NEG_INFINITY || order2 <= order1 {
            order1 + 10.0
        } else {
            order1 + (order2 - order1) / 2.0
        }
    }

    fn order_is_in_between(&self, start_order: f64, order: f64, end_order: f64) -> bool {
        if start_order <= end_order {
            start_order <= order && order <= end_order
        } else {
            // segment wraps through infinity
            order >= start_order || order <= end_order
        }
    }
}
