//! Oriented Euclidean primitives of the extended plane.
//!
//! Purpose
//! - Concrete value types `Point`, `Line`, `Circle`, `ImaginaryCircle` with
//!   direct Euclidean queries (distance, location, containment, projection,
//!   tangents) and Euclidean transforms.
//! - Closed sum types `GCircle`, `CircleOrLine`, `CircleOrLineOrPoint` used by
//!   every algorithm that switches on the primitive kind.
//!
//! Orientation
//! - Lines and circles are oriented: each has an "inside" region and a walking
//!   direction. `reversed()` swaps both. All region predicates respect it.
//! - `LocusWithOrder` parametrizes a line/circle by a scalar "order" that grows
//!   along that direction.
//!
//! Code cross-refs: `GeneralizedCircle` (conformal model), `intersection_points`.

use nalgebra::Vector2;

mod circle;
mod imaginary;
mod line;
mod point;
mod tangency;

pub use circle::Circle;
pub use imaginary::ImaginaryCircle;
pub use line::Line;
pub use point::{calculate_angle, Point};
pub use tangency::distance_between;

use crate::error::Result;

/// Three-way region classification of a point against an oriented line/circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionPointLocation {
    In,
    Bordering,
    Out,
}

/// Euclidean similarity: translate by `translation`, then rotate by `angle`
/// (radians) and scale by `zoom` around `focus`. Without a focus only the
/// translation applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2 {
    pub translation: Vector2<f64>,
    pub focus: Option<Vector2<f64>>,
    pub zoom: f64,
    pub angle: f64,
}

impl Transform2 {
    pub fn identity() -> Self {
        Self {
            translation: Vector2::zeros(),
            focus: None,
            zoom: 1.0,
            angle: 0.0,
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            translation: Vector2::new(dx, dy),
            ..Self::identity()
        }
    }

    /// Rotation and scaling around `(focus_x, focus_y)`, no translation.
    pub fn around(focus_x: f64, focus_y: f64, zoom: f64, angle: f64) -> Self {
        Self {
            translation: Vector2::zeros(),
            focus: Some(Vector2::new(focus_x, focus_y)),
            zoom,
            angle,
        }
    }

    #[inline]
    pub(crate) fn apply_xy(&self, x: f64, y: f64) -> (f64, f64) {
        let x = x + self.translation.x;
        let y = y + self.translation.y;
        match self.focus {
            Some(f) => {
                let (sin, cos) = self.angle.sin_cos();
                let x0 = x - f.x;
                let y0 = y - f.y;
                (
                    (x0 * cos - y0 * sin) * self.zoom + f.x,
                    (x0 * sin + y0 * cos) * self.zoom + f.y,
                )
            }
            None => (x, y),
        }
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// A totally ordered set of points homeomorphic to a segment or a loop, with
/// `order` as its local 1D coordinate.
///
/// Laws: `order2point(point2order(p)) ≈ p` for `p` on the locus, and vice versa.
pub trait LocusWithOrder {
    fn point2order(&self, point: &Point) -> f64;
    fn order2point(&self, order: f64) -> Point;
    /// An order strictly inside the directed segment `order1 → order2`.
    fn order_in_between(&self, order1: f64, order2: f64) -> f64;
    fn order_is_in_between(&self, start_order: f64, order: f64, end_order: f64) -> bool;

    /// Assumes all three points lie on `self`.
    fn point_is_in_between(&self, start: &Point, point: &Point, end: &Point) -> bool {
        self.order_is_in_between(
            self.point2order(start),
            self.point2order(point),
            self.point2order(end),
        )
    }

    /// Sort points by the order they lie in on `self`.
    fn order_points(&self, points: &[Point]) -> Vec<Point> {
        let mut keyed: Vec<(f64, Point)> =
            points.iter().map(|p| (self.point2order(p), *p)).collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, p)| p).collect()
    }

    /// A point strictly inside the directed arc/segment `point1 → point2`.
    fn point_in_between(&self, point1: &Point, point2: &Point) -> Point {
        self.order2point(self.order_in_between(self.point2order(point1), self.point2order(point2)))
    }
}

/// Oriented line or circle: the objects that bound a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleOrLine {
    Circle(Circle),
    Line(Line),
}

impl From<Circle> for CircleOrLine {
    fn from(c: Circle) -> Self {
        CircleOrLine::Circle(c)
    }
}

impl From<Line> for CircleOrLine {
    fn from(l: Line) -> Self {
        CircleOrLine::Line(l)
    }
}

impl CircleOrLine {
    pub fn distance_from(&self, point: &Point) -> f64 {
        match self {
            CircleOrLine::Circle(c) => c.distance_from(point),
            CircleOrLine::Line(l) => l.distance_from(point),
        }
    }

    pub fn calculate_location_epsilon(&self, point: &Point) -> RegionPointLocation {
        match self {
            CircleOrLine::Circle(c) => c.calculate_location_epsilon(point),
            CircleOrLine::Line(l) => l.calculate_location_epsilon(point),
        }
    }

    pub fn has_inside(&self, point: &Point) -> bool {
        match self {
            CircleOrLine::Circle(c) => c.has_inside(point),
            CircleOrLine::Line(l) => l.has_inside(point),
        }
    }

    pub fn has_inside_epsilon(&self, point: &Point) -> bool {
        self.calculate_location_epsilon(point) == RegionPointLocation::In
    }

    pub fn has_outside_epsilon(&self, point: &Point) -> bool {
        self.calculate_location_epsilon(point) == RegionPointLocation::Out
    }

    pub fn project(&self, point: &Point) -> Point {
        match self {
            CircleOrLine::Circle(c) => c.project(point),
            CircleOrLine::Line(l) => l.project(point),
        }
    }

    pub fn tangent_at(&self, point: &Point) -> Line {
        match self {
            CircleOrLine::Circle(c) => c.tangent_at(point),
            CircleOrLine::Line(l) => l.tangent_at(point),
        }
    }

    pub fn is_inside(&self, other: &CircleOrLine) -> bool {
        match self {
            CircleOrLine::Circle(c) => c.is_inside(other),
            CircleOrLine::Line(l) => l.is_inside(other),
        }
    }

    pub fn is_outside(&self, other: &CircleOrLine) -> bool {
        match self {
            CircleOrLine::Circle(c) => c.is_outside(other),
            CircleOrLine::Line(l) => l.is_outside(other),
        }
    }

    pub fn reversed(&self) -> CircleOrLine {
        match self {
            CircleOrLine::Circle(c) => c.reversed().into(),
            CircleOrLine::Line(l) => l.reversed().into(),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> CircleOrLine {
        match self {
            CircleOrLine::Circle(c) => c.translated(dx, dy).into(),
            CircleOrLine::Line(l) => l.translated(dx, dy).into(),
        }
    }

    pub fn scaled(&self, focus_x: f64, focus_y: f64, zoom: f64) -> Result<CircleOrLine> {
        Ok(match self {
            CircleOrLine::Circle(c) => c.scaled(focus_x, focus_y, zoom)?.into(),
            CircleOrLine::Line(l) => l.scaled(focus_x, focus_y, zoom).into(),
        })
    }

    pub fn rotated(&self, focus_x: f64, focus_y: f64, angle: f64) -> CircleOrLine {
        match self {
            CircleOrLine::Circle(c) => c.rotated(focus_x, focus_y, angle).into(),
            CircleOrLine::Line(l) => l.rotated(focus_x, focus_y, angle).into(),
        }
    }

    pub fn transformed(&self, t: &Transform2) -> Result<CircleOrLine> {
        Ok(match self {
            CircleOrLine::Circle(c) => c.transformed(t)?.into(),
            CircleOrLine::Line(l) => l.transformed(t).into(),
        })
    }
}

impl LocusWithOrder for CircleOrLine {
    fn point2order(&self, point: &Point) -> f64 {
        match self {
            CircleOrLine::Circle(c) => c.point2order(point),
            CircleOrLine::Line(l) => l.point2order(point),
        }
    }

    fn order2point(&self, order: f64) -> Point {
        match self {
            CircleOrLine::Circle(c) => c.order2point(order),
            CircleOrLine::Line(l) => l.order2point(order),
        }
    }

    fn order_in_between(&self, order1: f64, order2: f64) -> f64 {
        match self {
            CircleOrLine::Circle(c) => c.order_in_between(order1, order2),
            CircleOrLine::Line(l) => l.order_in_between(order1, order2),
        }
    }

    fn order_is_in_between(&self, start_order: f64, order: f64, end_order: f64) -> bool {
        match self {
            CircleOrLine::Circle(c) => c.order_is_in_between(start_order, order, end_order),
            CircleOrLine::Line(l) => l.order_is_in_between(start_order, order, end_order),
        }
    }
}

/// Targets of tangency constructions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleOrLineOrPoint {
    Circle(Circle),
    Line(Line),
    Point(Point),
}

impl From<CircleOrLine> for CircleOrLineOrPoint {
    fn from(c: CircleOrLine) -> Self {
        match c {
            CircleOrLine::Circle(c) => CircleOrLineOrPoint::Circle(c),
            CircleOrLine::Line(l) => CircleOrLineOrPoint::Line(l),
        }
    }
}

impl From<Circle> for CircleOrLineOrPoint {
    fn from(c: Circle) -> Self {
        CircleOrLineOrPoint::Circle(c)
    }
}

impl From<Line> for CircleOrLineOrPoint {
    fn from(l: Line) -> Self {
        CircleOrLineOrPoint::Line(l)
    }
}

impl From<Point> for CircleOrLineOrPoint {
    fn from(p: Point) -> Self {
        CircleOrLineOrPoint::Point(p)
    }
}

impl CircleOrLineOrPoint {
    pub fn distance_from(&self, point: &Point) -> f64 {
        match self {
            CircleOrLineOrPoint::Circle(c) => c.distance_from(point),
            CircleOrLineOrPoint::Line(l) => l.distance_from(point),
            CircleOrLineOrPoint::Point(p) => p.distance_from(point),
        }
    }
}

/// Any object of the conformal model, in its Euclidean form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GCircle {
    /// Includes [`Point::CONFORMAL_INFINITY`].
    Point(Point),
    Line(Line),
    Circle(Circle),
    Imaginary(ImaginaryCircle),
}

impl From<Point> for GCircle {
    fn from(p: Point) -> Self {
        GCircle::Point(p)
    }
}

impl From<Line> for GCircle {
    fn from(l: Line) -> Self {
        GCircle::Line(l)
    }
}

impl From<Circle> for GCircle {
    fn from(c: Circle) -> Self {
        GCircle::Circle(c)
    }
}

impl From<ImaginaryCircle> for GCircle {
    fn from(c: ImaginaryCircle) -> Self {
        GCircle::Imaginary(c)
    }
}

impl From<CircleOrLine> for GCircle {
    fn from(c: CircleOrLine) -> Self {
        match c {
            CircleOrLine::Circle(c) => GCircle::Circle(c),
            CircleOrLine::Line(l) => GCircle::Line(l),
        }
    }
}

impl From<CircleOrLineOrPoint> for GCircle {
    fn from(c: CircleOrLineOrPoint) -> Self {
        match c {
            CircleOrLineOrPoint::Circle(c) => GCircle::Circle(c),
            CircleOrLineOrPoint::Line(l) => GCircle::Line(l),
            CircleOrLineOrPoint::Point(p) => GCircle::Point(p),
        }
    }
}

impl GCircle {
    /// Short lowercase kind name (`point`, `infinity`, `line`, `circle`, `imaginary`).
    pub fn kind(&self) -> &'static str {
        match self {
            GCircle::Point(p) if p.is_infinity() => "infinity",
            GCircle::Point(_) => "point",
            GCircle::Line(_) => "line",
            GCircle::Circle(_) => "circle",
            GCircle::Imaginary(_) => "imaginary",
        }
    }

    /// Same kind, ignoring parameters. Infinity counts as a point.
    pub fn same_kind_as(&self, other: &GCircle) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn as_circle_or_line(&self) -> Option<CircleOrLine> {
        match *self {
            GCircle::Circle(c) => Some(c.into()),
            GCircle::Line(l) => Some(l.into()),
            GCircle::Point(_) | GCircle::Imaginary(_) => None,
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> GCircle {
        match self {
            GCircle::Point(p) => p.translated(dx, dy).into(),
            GCircle::Line(l) => l.translated(dx, dy).into(),
            GCircle::Circle(c) => c.translated(dx, dy).into(),
            GCircle::Imaginary(c) => c.translated(dx, dy).into(),
        }
    }

    pub fn scaled(&self, focus_x: f64, focus_y: f64, zoom: f64) -> Result<GCircle> {
        Ok(match self {
            GCircle::Point(p) => p.scaled(focus_x, focus_y, zoom).into(),
            GCircle::Line(l) => l.scaled(focus_x, focus_y, zoom).into(),
            GCircle::Circle(c) => c.scaled(focus_x, focus_y, zoom)?.into(),
            GCircle::Imaginary(c) => c.scaled(focus_x, focus_y, zoom)?.into(),
        })
    }

    pub fn rotated(&self, focus_x: f64, focus_y: f64, angle: f64) -> GCircle {
        match self {
            GCircle::Point(p) => p.rotated(focus_x, focus_y, angle).into(),
            GCircle::Line(l) => l.rotated(focus_x, focus_y, angle).into(),
            GCircle::Circle(c) => c.rotated(focus_x, focus_y, angle).into(),
            GCircle::Imaginary(c) => c.rotated(focus_x, focus_y, angle).into(),
        }
    }

    pub fn transformed(&self, t: &Transform2) -> Result<GCircle> {
        Ok(match self {
            GCircle::Point(p) => p.transformed(t).into(),
            GCircle::Line(l) => l.transformed(t).into(),
            GCircle::Circle(c) => c.transformed(t)?.into(),
            GCircle::Imaginary(c) => c.transformed(t)?.into(),
        })
    }
}
