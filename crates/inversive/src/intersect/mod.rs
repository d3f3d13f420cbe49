//! Intersection and tangency solver for oriented lines and circles.
//!
//! Purpose
//! - Pairwise intersection of `CircleOrLine`s returning 0, 1 or 2 points, with
//!   a deterministic order of the two-point case.
//!
//! Ordering ("needle" and "fabric")
//! - The first operand is the needle: it is walked along its own direction.
//!   The second is the fabric: only its inside matters. Of two intersection
//!   points, the entrance into the fabric comes first and the exit second.
//! - Swapping the operands of two crossing circles therefore reverses the pair.
//!
//! Thresholds
//! - Separation, nesting and touching are decided with
//!   `TANGENTIAL_TOUCH_EPSILON`, so a near-tangent pair is always reported as
//!   exactly one point. The branches are evaluated in order: later ones assume
//!   the earlier degeneracies were already excluded.
//! - `calculate_intersection` is the typed view used where coincidence matters;
//!   it reports coincident objects as `Eq` and uses the finer `EPSILON` band.
//!
//! Code cross-refs: `LocusWithOrder::point_in_between`, `CircleOrLine::has_inside_epsilon`.

use crate::cfg::{EPSILON, TANGENTIAL_TOUCH_EPSILON, TANGENTIAL_TOUCH_EPSILON_F32};
use crate::primitives::{Circle, CircleOrLine, Line, LocusWithOrder, Point};

/// Typed result of intersecting two `CircleOrLine`s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleLineIntersection {
    None,
    /// The objects coincide (possibly with opposite orientations).
    Eq,
    /// One touching point; for parallel lines, the point at infinity.
    Tangent(Point),
    /// Entrance then exit of the first operand into the second.
    Double(Point, Point),
}

/// Ordered intersection points of `a` (needle) and `b` (fabric).
///
/// - Identical objects: empty.
/// - Parallel lines: `[∞]`; crossing lines: the finite point and `∞`, in
///   the order they are met walking along `a`.
/// - Line and circle: empty, one tangency point, or entrance then exit.
/// - Two circles: empty (concentric, nested or separated), one tangency
///   point, or entrance then exit.
pub fn intersection_points(a: &CircleOrLine, b: &CircleOrLine) -> Vec<Point> {
    if a == b {
        return Vec::new();
    }
    match (a, b) {
        (CircleOrLine::Line(l1), CircleOrLine::Line(l2)) => match line_line(l1, l2) {
            Some((p, q)) => vec![p, q],
            None => vec![Point::CONFORMAL_INFINITY],
        },
        (CircleOrLine::Line(l), CircleOrLine::Circle(c)) => {
            line_circle(l, c, TANGENTIAL_TOUCH_EPSILON).into_points()
        }
        (CircleOrLine::Circle(c), CircleOrLine::Line(l)) => {
            let mut points = line_circle(l, c, TANGENTIAL_TOUCH_EPSILON).into_points();
            points.reverse();
            points
        }
        (CircleOrLine::Circle(c1), CircleOrLine::Circle(c2)) => {
            circle_circle(c1, c2, TANGENTIAL_TOUCH_EPSILON).into_points()
        }
    }
}

/// Same solver as [`intersection_points`] with a typed result. Coincident
/// objects, including a circle and its reverse, are `Eq`.
pub fn calculate_intersection(a: &CircleOrLine, b: &CircleOrLine) -> CircleLineIntersection {
    if a == b || *a == b.reversed() {
        return CircleLineIntersection::Eq;
    }
    match (a, b) {
        (CircleOrLine::Line(l1), CircleOrLine::Line(l2)) => match line_line(l1, l2) {
            Some((p, q)) => CircleLineIntersection::Double(p, q),
            None => CircleLineIntersection::Tangent(Point::CONFORMAL_INFINITY),
        },
        (CircleOrLine::Line(l), CircleOrLine::Circle(c)) => line_circle(l, c, EPSILON),
        (CircleOrLine::Circle(c), CircleOrLine::Line(l)) => match line_circle(l, c, EPSILON) {
            CircleLineIntersection::Double(p, q) => CircleLineIntersection::Double(q, p),
            other => other,
        },
        (CircleOrLine::Circle(c1), CircleOrLine::Circle(c2)) => circle_circle(c1, c2, EPSILON),
    }
}

impl CircleLineIntersection {
    pub fn into_points(self) -> Vec<Point> {
        match self {
            CircleLineIntersection::None | CircleLineIntersection::Eq => Vec::new(),
            CircleLineIntersection::Tangent(p) => vec![p],
            CircleLineIntersection::Double(p, q) => vec![p, q],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CircleLineIntersection::None | CircleLineIntersection::Eq => 0,
            CircleLineIntersection::Tangent(_) => 1,
            CircleLineIntersection::Double(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `None` when parallel (or collinear). Otherwise the finite crossing and
/// infinity, ordered along `l1`.
fn line_line(l1: &Line, l2: &Line) -> Option<(Point, Point)> {
    let (a1, b1, c1) = (l1.a(), l1.b(), l1.c());
    let (a2, b2, c2) = (l2.a(), l2.b(), l2.c());
    let w = a1 * b2 - a2 * b1;
    if (w / l1.norm() / l2.norm()).abs() < EPSILON {
        return None;
    }
    // Cramer's rule in homogeneous coordinates
    let wx = b1 * c2 - b2 * c1;
    let wy = a2 * c1 - a1 * c2;
    let p = Point::new(wx / w, wy / w);
    let q = Point::CONFORMAL_INFINITY;
    let dir = l1.direction();
    if dir.x * a2 + dir.y * b2 >= 0.0 {
        Some((p, q))
    } else {
        Some((q, p))
    }
}

/// The line is the needle.
fn line_circle(line: &Line, circle: &Circle, touch: f64) -> CircleLineIntersection {
    let projection = line.project_xy(circle.x(), circle.y());
    let distance = (projection.x - circle.x()).hypot(projection.y - circle.y());
    let r = circle.radius();
    if distance >= r + touch {
        return CircleLineIntersection::None;
    }
    if (distance - r).abs() < touch {
        return CircleLineIntersection::Tangent(projection);
    }
    let half_chord = (r * r - distance * distance).sqrt();
    let v = line.direction();
    let p = Point::new(projection.x + v.x * half_chord, projection.y + v.y * half_chord);
    let q = Point::new(projection.x - v.x * half_chord, projection.y - v.y * half_chord);
    // directed segment p -> s -> q
    let s = line.point_in_between(&p, &q);
    if circle.has_inside_epsilon(&s) {
        CircleLineIntersection::Double(p, q)
    } else {
        CircleLineIntersection::Double(q, p)
    }
}

fn circle_circle(c1: &Circle, c2: &Circle, touch: f64) -> CircleLineIntersection {
    let (x1, y1, r1) = (c1.x(), c1.y(), c1.radius());
    let (x2, y2, r2) = (c2.x(), c2.y(), c2.radius());
    let dcx = x2 - x1;
    let dcy = y2 - y1;
    let d2 = dcx * dcx + dcy * dcy;
    let d = d2.sqrt();
    let r_diff = (r1 - r2).abs();
    // concentric: the touch point below would divide by d = 0
    if d < EPSILON && r_diff < touch {
        return CircleLineIntersection::None;
    }
    if r_diff >= d + touch || d >= r1 + r2 + touch {
        return CircleLineIntersection::None;
    }
    if (r_diff - d).abs() < touch || (d - r1 - r2).abs() < touch {
        // a smaller needle touches the enclosing fabric on the side away from c2
        let k = if (r_diff - d).abs() < touch && r1 < r2 { -r1 } else { r1 };
        return CircleLineIntersection::Tangent(Point::new(x1 + dcx / d * k, y1 + dcy / d * k));
    }
    let r12 = c1.r2();
    let a = (d2 + r12 - c2.r2()) / (2.0 * d);
    let h = (r12 - a * a).sqrt();
    let pcx = x1 + a * dcx / d;
    let pcy = y1 + a * dcy / d;
    let vx = h * dcx / d;
    let vy = h * dcy / d;
    let p = Point::new(pcx + vy, pcy - vx);
    let q = Point::new(pcx - vy, pcy + vx);
    // directed arc p -> s -> q
    let s = c1.point_in_between(&p, &q);
    if c2.has_inside_epsilon(&s) {
        CircleLineIntersection::Double(p, q)
    } else {
        CircleLineIntersection::Double(q, p)
    }
}

/// Reduced-precision variant of [`intersection_points`] for high-frequency
/// call sites (rendering). Same branches and ordering rule; the arithmetic
/// runs in `f32` with `TANGENTIAL_TOUCH_EPSILON_F32`, the ordering midpoint
/// comes from the operands' own order parametrization. Infinity is
/// `[f32::INFINITY; 2]`.
pub fn intersection_coordinates_f32(a: &CircleOrLine, b: &CircleOrLine) -> Vec<[f32; 2]> {
    if a == b {
        return Vec::new();
    }
    match (a, b) {
        (CircleOrLine::Line(_), CircleOrLine::Line(_)) => intersection_points(a, b)
            .into_iter()
            .map(|p| [p.x as f32, p.y as f32])
            .collect(),
        (CircleOrLine::Line(l), CircleOrLine::Circle(c)) => line_circle_f32(l, c),
        (CircleOrLine::Circle(c), CircleOrLine::Line(l)) => {
            let mut coords = line_circle_f32(l, c);
            coords.reverse();
            coords
        }
        (CircleOrLine::Circle(c1), CircleOrLine::Circle(c2)) => circle_circle_f32(c1, c2),
    }
}

fn line_circle_f32(line: &Line, circle: &Circle) -> Vec<[f32; 2]> {
    let projection = line.project_xy(circle.x(), circle.y());
    let (px, py) = (projection.x as f32, projection.y as f32);
    let (cx, cy, r) = (circle.x() as f32, circle.y() as f32, circle.radius() as f32);
    let distance = (px - cx).hypot(py - cy);
    if distance >= r + TANGENTIAL_TOUCH_EPSILON_F32 {
        return Vec::new();
    }
    if (distance - r).abs() < TANGENTIAL_TOUCH_EPSILON_F32 {
        return vec![[px, py]];
    }
    let half_chord = (r * r - distance * distance).sqrt();
    let v = line.direction();
    let (vx, vy) = (v.x as f32, v.y as f32);
    let p = [px + vx * half_chord, py + vy * half_chord];
    let q = [px - vx * half_chord, py - vy * half_chord];
    order_pair_f32(line, circle, p, q)
}

fn circle_circle_f32(c1: &Circle, c2: &Circle) -> Vec<[f32; 2]> {
    let (x1, y1, r1) = (c1.x() as f32, c1.y() as f32, c1.radius() as f32);
    let (x2, y2, r2) = (c2.x() as f32, c2.y() as f32, c2.radius() as f32);
    let dcx = x2 - x1;
    let dcy = y2 - y1;
    let d2 = dcx * dcx + dcy * dcy;
    let d = d2.sqrt();
    let r_diff = (r1 - r2).abs();
    let touch = TANGENTIAL_TOUCH_EPSILON_F32;
    if d < EPSILON as f32 && r_diff < touch {
        return Vec::new();
    }
    if r_diff >= d + touch || d >= r1 + r2 + touch {
        return Vec::new();
    }
    if (r_diff - d).abs() < touch || (d - r1 - r2).abs() < touch {
        let k = if (r_diff - d).abs() < touch && r1 < r2 { -r1 } else { r1 };
        return vec![[x1 + dcx / d * k, y1 + dcy / d * k]];
    }
    let r12 = r1 * r1;
    let a = (d2 + r12 - r2 * r2) / (2.0 * d);
    let h = (r12 - a * a).sqrt();
    let pcx = x1 + a * dcx / d;
    let pcy = y1 + a * dcy / d;
    let vx = h * dcx / d;
    let vy = h * dcy / d;
    let p = [pcx + vy, pcy - vx];
    let q = [pcx - vy, pcy + vx];
    order_pair_f32(c1, c2, p, q)
}

/// Entrance first: the midpoint of `p -> q` along the needle lies inside the fabric.
fn order_pair_f32<N: LocusWithOrder>(
    needle: &N,
    fabric: &Circle,
    p: [f32; 2],
    q: [f32; 2],
) -> Vec<[f32; 2]> {
    let s = needle.point_in_between(
        &Point::new(p[0] as f64, p[1] as f64),
        &Point::new(q[0] as f64, q[1] as f64),
    );
    if fabric.has_inside_epsilon(&s) {
        vec![p, q]
    } else {
        vec![q, p]
    }
}
