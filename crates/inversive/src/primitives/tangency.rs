//! Tangency constructions and separation of primitives.
//!
//! - `Circle::translated_until_tangency`: slide a circle (keeping its radius)
//!   to the nearest position touching one base object.
//! - `Circle::translated_until_bi_tangency`: same, touching two bases at once.
//! - `distance_between`: Euclidean gap between two loci.

use super::{Circle, CircleOrLine, CircleOrLineOrPoint, Line, LocusWithOrder, Point};
use crate::intersect::intersection_points;

/// Loci of possible centers of a radius-`r` circle tangent to `base`: the
/// outer offset, and the inner one when it exists (a point base has only one).
fn center_loci(base: &CircleOrLineOrPoint, r: f64) -> (CircleOrLine, Option<CircleOrLine>) {
    match *base {
        CircleOrLineOrPoint::Circle(c) => {
            let outer = Circle { radius: c.radius + r, is_ccw: true, ..c };
            let inner = Circle::ccw(c.x, c.y, (c.radius - r).abs()).ok();
            (outer.into(), inner.map(CircleOrLine::from))
        }
        CircleOrLineOrPoint::Line(l) => {
            let n = l.normal();
            (
                l.translated(r * n.x, r * n.y).into(),
                Some(l.translated(-r * n.x, -r * n.y).into()),
            )
        }
        CircleOrLineOrPoint::Point(p) => {
            let around = Circle {
                x: p.x,
                y: p.y,
                radius: r,
                is_ccw: true,
            };
            (around.into(), None)
        }
    }
}

impl Circle {
    /// Same-radius circle tangent to both `base1` and `base2` whose center is
    /// closest to the current one. Out-out, out-in, in-out and in-in
    /// configurations are all considered. `None` when no configuration exists
    /// (e.g. parallel lines too far apart).
    pub fn translated_until_bi_tangency(
        &self,
        base1: &CircleOrLineOrPoint,
        base2: &CircleOrLineOrPoint,
    ) -> Option<Circle> {
        let (b11, b12) = center_loci(base1, self.radius);
        let (b21, b22) = center_loci(base2, self.radius);
        let firsts = std::iter::once(b11).chain(b12);
        let mut candidates: Vec<Point> = Vec::new();
        for first in firsts {
            for second in std::iter::once(b21).chain(b22) {
                for p in intersection_points(&first, &second) {
                    if !p.is_infinity() && !candidates.contains(&p) {
                        candidates.push(p);
                    }
                }
            }
        }
        let here = self.center_point();
        candidates
            .into_iter()
            .min_by(|p, q| p.distance_from(&here).total_cmp(&q.distance_from(&here)))
            .map(|center| self.with_center_at(&center))
    }

    /// Nearest same-radius circle tangent to `base`.
    pub fn translated_until_tangency(&self, base: &CircleOrLineOrPoint) -> Circle {
        let here = self.center_point();
        let (outer, inner) = center_loci(base, self.radius);
        let best = std::iter::once(outer)
            .chain(inner)
            .map(|locus| locus.project(&here))
            .min_by(|p, q| p.distance_from(&here).total_cmp(&q.distance_from(&here)))
            .unwrap_or(here);
        self.with_center_at(&best)
    }

    #[inline]
    fn with_center_at(&self, center: &Point) -> Circle {
        Circle {
            x: center.x,
            y: center.y,
            ..*self
        }
    }
}

/// Smallest Euclidean distance between points of `a` and points of `b`;
/// `0` when they meet. Infinity is ignored as a meeting point of lines.
pub fn distance_between(a: &CircleOrLineOrPoint, b: &CircleOrLineOrPoint) -> f64 {
    use CircleOrLineOrPoint as C;
    match (a, b) {
        (C::Point(p), other) | (other, C::Point(p)) => other.distance_from(p),
        (C::Circle(c1), C::Circle(c2)) => {
            let d = c1.distance_between_centers(c2);
            (d - c1.radius - c2.radius)
                .max((c1.radius - c2.radius).abs() - d)
                .max(0.0)
        }
        (C::Circle(c), C::Line(l)) | (C::Line(l), C::Circle(c)) => {
            (l.distance_from(&c.center_point()) - c.radius).max(0.0)
        }
        (C::Line(l1), C::Line(l2)) => line_gap(l1, l2),
    }
}

fn line_gap(l1: &Line, l2: &Line) -> f64 {
    if l1.is_parallel_to(l2) {
        l2.distance_from(&l1.order2point(0.0))
    } else {
        0.0
    }
}
