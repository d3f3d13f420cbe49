use super::*;
use crate::primitives::{Circle, CircleOrLine, GCircle, ImaginaryCircle, Line, Point};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, LN_2};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn close_gc(a: &GeneralizedCircle, b: &GeneralizedCircle, eps: f64) -> bool {
    a.coords()
        .iter()
        .zip(b.coords().iter())
        .all(|(u, v)| (u - v).abs() < eps)
}

fn gc_circle(x: f64, y: f64, r: f64) -> GeneralizedCircle {
    Circle::ccw(x, y, r).unwrap().into()
}

fn gc_line(a: f64, b: f64, c: f64) -> GeneralizedCircle {
    Line::new(a, b, c).unwrap().into()
}

fn gc_point(x: f64, y: f64) -> GeneralizedCircle {
    Point::new(x, y).into()
}

fn as_point(g: &GeneralizedCircle) -> Point {
    match g.to_gcircle().unwrap() {
        GCircle::Point(p) => p,
        other => panic!("expected a point, got {other:?}"),
    }
}

fn as_circle(g: &GeneralizedCircle) -> Circle {
    match g.to_gcircle().unwrap() {
        GCircle::Circle(c) => c,
        other => panic!("expected a circle, got {other:?}"),
    }
}

fn as_line(g: &GeneralizedCircle) -> Line {
    match g.to_gcircle().unwrap() {
        GCircle::Line(l) => l.normalized(),
        other => panic!("expected a line, got {other:?}"),
    }
}

fn assert_point(g: &GeneralizedCircle, x: f64, y: f64) {
    let p = as_point(g);
    assert!(close(p.x, x) && close(p.y, y), "{p:?} != ({x}, {y})");
}

#[test]
fn exp_of_zero_is_identity() {
    assert_eq!(Bivector::ZERO.exp(), Rotor::IDENTITY);
    assert!(Bivector::ZERO.is_zero());
    let p = gc_point(3.0, -2.0);
    assert_point(&Rotor::IDENTITY.apply_to(&p), 3.0, -2.0);
}

#[test]
fn exp_branches_by_norm() {
    let elliptic = Bivector {
        xy: FRAC_PI_2,
        ..Bivector::ZERO
    };
    assert!(elliptic.norm2() < 0.0);
    let r = elliptic.exp();
    assert!(close(r.s, 0.0));
    assert!(close(r.b.xy, 1.0));

    let hyperbolic = Bivector {
        pm: LN_2,
        ..Bivector::ZERO
    };
    assert!(hyperbolic.norm2() > 0.0);
    let r = hyperbolic.exp();
    assert!(close(r.s, LN_2.cosh()));
    assert!(close(r.b.pm, LN_2.sinh()));

    // xm² − xp² = 0
    let parabolic = Bivector {
        xp: 1.0,
        xm: 1.0,
        ..Bivector::ZERO
    };
    assert!(close(parabolic.norm2(), 0.0));
    assert_eq!(parabolic.exp(), Rotor::new(1.0, parabolic));
}

#[test]
fn saturated_rotor_sends_everything_to_infinity() {
    let huge = Bivector {
        pm: 2.0 * crate::cfg::ROTOR_SATURATION_NORM,
        ..Bivector::ZERO
    };
    let r = huge.exp();
    assert!(r.is_saturated());
    assert!(r.apply_to(&gc_circle(1.0, 1.0, 1.0)).is_conformal_infinity());
    assert!(r.apply_to(&gc_point(0.0, 0.0)).is_conformal_infinity());
}

#[test]
fn dual_twice_negates() {
    let b = Bivector {
        xy: 1.0,
        xp: 2.0,
        xm: 3.0,
        yp: 4.0,
        ym: 5.0,
        pm: 6.0,
    };
    assert_eq!(b.dual().dual(), -b);
    assert!(close(b.dual().norm2(), -b.norm2()));
}

#[test]
fn normalized_bivector_has_unit_norm() {
    let b = Bivector::from_outer_product(&gc_circle(0.0, 0.0, 1.0), &gc_circle(1.0, 0.0, 1.0));
    assert!(close(b.normalized().norm2().abs(), 1.0));
    assert!(Bivector::ZERO.normalized().is_zero());
}

#[test]
fn pencil_rotor_composes_two_inversions() {
    let pairs = [
        (gc_circle(0.0, 0.0, 1.0), gc_circle(1.0, 0.0, 1.0)),
        (gc_line(1.0, 0.0, 0.0), gc_line(0.0, 1.0, 0.0)),
        (gc_circle(0.0, 0.0, 1.0), gc_circle(0.0, 0.0, 2.0)),
        // parabolic
        (gc_line(1.0, 0.0, 0.0), gc_line(1.0, 0.0, -1.0)),
    ];
    for (a, b) in pairs {
        let rotor = Bivector::from_pencil(&a, &b).exp();
        for target in [gc_point(2.0, 0.5), gc_point(1.0, 2.0), gc_point(0.0, 3.0)] {
            let by_rotor = as_point(&rotor.apply_to(&target));
            let by_inversions = as_point(&b.apply_to(&a.apply_to(&target)));
            assert!(by_rotor.distance_from(&by_inversions) < 1e-9);
        }
    }
}

#[test]
fn pencil_of_equal_circles_is_zero() {
    let a = gc_circle(1.0, 2.0, 3.0);
    assert!(Bivector::from_pencil(&a, &a).is_zero());
}

#[test]
fn reversed_rotor_undoes_the_motion() {
    let rotor = Bivector::from_pencil(&gc_circle(0.0, 0.0, 1.0), &gc_circle(1.0, 0.0, 1.0)).exp();
    let p = gc_point(2.0, 0.5);
    assert_point(&rotor.apply_to(&p), -0.8, 0.4);
    assert_point(&rotor.reversed().apply_to(&rotor.apply_to(&p)), 2.0, 0.5);
    // scaling a rotor does not change the motion
    assert_point(&(rotor * 3.0).apply_to(&p), -0.8, 0.4);
    assert_point(&rotor.normalized().apply_to(&p), -0.8, 0.4);
}

#[test]
fn invert_point_in_unit_circle() {
    let unit = CircleOrLine::from(Circle::ccw(0.0, 0.0, 1.0).unwrap());
    let image = invert(&unit, &Point::new(2.0, 0.0).into()).unwrap();
    match image {
        GCircle::Point(p) => assert!(close(p.x, 0.5) && close(p.y, 0.0)),
        other => panic!("expected a point, got {other:?}"),
    }
    let center = invert(&unit, &Point::new(0.0, 0.0).into()).unwrap();
    assert_eq!(center, GCircle::Point(Point::CONFORMAL_INFINITY));
    let inf = invert(&unit, &Point::CONFORMAL_INFINITY.into()).unwrap();
    assert!(matches!(inf, GCircle::Point(p) if close(p.x, 0.0) && close(p.y, 0.0)));
}

#[test]
fn invert_circle_flips_orientation() {
    let unit = CircleOrLine::from(Circle::ccw(0.0, 0.0, 1.0).unwrap());
    let image = invert(&unit, &Circle::ccw(3.0, 0.0, 1.0).unwrap().into()).unwrap();
    match image {
        GCircle::Circle(c) => {
            assert!(close(c.x(), 0.375) && close(c.y(), 0.0));
            assert!(close(c.radius(), 0.125));
            assert!(!c.is_ccw());
        }
        other => panic!("expected a circle, got {other:?}"),
    }
    // a circle through the center becomes a line
    let through_center = invert(&unit, &Circle::ccw(1.0, 0.0, 1.0).unwrap().into()).unwrap();
    match through_center {
        GCircle::Line(l) => {
            let l = l.normalized();
            assert!(close(l.a().abs(), 1.0) && close(l.c().abs(), 0.5));
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn invert_in_line_is_reflection() {
    let mirror = CircleOrLine::from(Line::new(1.0, 0.0, -1.0).unwrap());
    let image = invert(&mirror, &Point::new(0.0, 0.0).into()).unwrap();
    assert!(matches!(image, GCircle::Point(p) if close(p.x, 2.0) && close(p.y, 0.0)));
    let imaginary = invert(&mirror, &ImaginaryCircle::new(0.0, 3.0, 2.0).unwrap().into()).unwrap();
    match imaginary {
        GCircle::Imaginary(c) => {
            assert!(close(c.x(), 2.0) && close(c.y(), 3.0) && close(c.radius(), 2.0));
        }
        other => panic!("expected an imaginary circle, got {other:?}"),
    }
}

#[test]
fn bisector_of_intersecting_circles() {
    let a = gc_circle(0.0, 0.0, 1.0);
    let b = gc_circle(1.0, 0.0, 1.0);
    let bi = a.bisector(&b, 2, 1).unwrap();
    let c = as_circle(&bi);
    assert!(close(c.x(), 0.5) && close(c.y(), 0.0));
    assert!((c.radius() - 0.866_025_403_784_438_6).abs() < 1e-9);
    assert!(c.is_ccw());
    // the bisector swaps its two circles
    assert!(close_gc(&bi.apply_to(&a), &b, 1e-9));
}

#[test]
fn n_sectors_are_evenly_spaced() {
    let a = gc_circle(0.0, 0.0, 1.0);
    let b = gc_circle(1.0, 0.0, 1.0);
    let n = 4;
    for k in 1..n {
        let prev = a.bisector(&b, n, k - 1).unwrap();
        let next = a.bisector(&b, n, k + 1).unwrap();
        let mirrored = a.bisector(&b, n, k).unwrap().apply_to(&prev);
        assert!(close_gc(&mirrored.normalized(), &next.normalized(), 1e-9), "k = {k}");
    }
}

#[test]
fn bisector_of_disjoint_circles_is_imaginary() {
    let a = gc_circle(0.0, 0.0, 1.0);
    let b = gc_circle(3.0, 0.0, 1.0);
    assert_eq!(a.pencil_type(&b), Some(crate::conformal::CirclePencilType::Hyperbolic));
    let bi = a.bisector(&b, 2, 1).unwrap();
    match bi.to_gcircle().unwrap() {
        GCircle::Imaginary(c) => {
            assert!(close(c.x(), 1.5) && close(c.y(), 0.0));
            assert!((c.radius() - 1.25f64.sqrt()).abs() < 1e-9);
        }
        other => panic!("expected an imaginary circle, got {other:?}"),
    }
    let image = as_circle(&bi.apply_to(&a));
    assert!(close(image.x(), 3.0) && close(image.radius(), 1.0));
    assert!(!image.is_ccw());
}

#[test]
fn bisector_degenerate_inputs() {
    let a = gc_circle(0.0, 0.0, 1.0);
    assert_eq!(a.bisector(&gc_circle(1.0, 0.0, 1.0), 0, 0), None);
    // a + (−a) vanishes
    assert_eq!(a.bisector(&-a, 2, 1), None);
}

#[test]
fn naive_bisector_picks_sectors_by_pencil() {
    let a = gc_circle(0.0, 0.0, 1.0);
    let b = gc_circle(1.0, 0.0, 1.0);
    let l = as_line(&a.naive_bisector(&b, 2, 1, true).unwrap());
    // x = 0.5, inside on the side of the origin
    assert!(close(l.a(), -1.0) && close(l.b(), 0.0) && close(l.c(), 0.5));

    let first = as_circle(&a.naive_bisector(&b, 3, 0, true).unwrap());
    assert!(close(first.x(), 0.0) && close(first.radius(), 1.0) && first.is_ccw());
    let last = as_circle(&a.naive_bisector(&b, 3, 3, true).unwrap());
    assert!(close(last.x(), 1.0) && close(last.radius(), 1.0) && !last.is_ccw());

    let far = gc_circle(3.0, 0.0, 1.0);
    let l = as_line(&a.naive_bisector(&far, 2, 1, true).unwrap());
    assert!(close(l.a(), -1.0) && close(l.b(), 0.0) && close(l.c(), 1.5));

    assert_eq!(a.naive_bisector(&b, 0, 0, true), None);
}

#[test]
fn bi_inversion_in_two_lines_rotates() {
    let e1 = gc_line(0.0, 1.0, 0.0);
    let e2 = gc_line(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0);
    let p = gc_point(1.0, 0.0);
    assert_point(&p.bi_inversion(&e1, &e2, 1.0), 0.0, 1.0);
    assert_point(&p.bi_inversion(&e1, &e2, 0.5), FRAC_1_SQRT_2, FRAC_1_SQRT_2);
    assert_point(&p.bi_inversion(&e1, &e2, 0.0), 1.0, 0.0);
}

#[test]
fn bi_inversion_in_concentric_circles_dilates() {
    let e1 = gc_circle(0.0, 0.0, 1.0);
    let e2 = gc_circle(0.0, 0.0, 2.0);
    let p = gc_point(2.0, 0.0);
    assert_point(&p.bi_inversion(&e1, &e2, 1.0), 8.0, 0.0);
    assert_point(&p.bi_inversion(&e1, &e2, 0.5), 4.0, 0.0);
}

#[test]
fn loxodromic_shift_around_origin() {
    let origin = gc_point(0.0, 0.0);
    let inf = GeneralizedCircle::CONFORMAL_INFINITY;
    let p = gc_point(1.0, 0.0);
    // screen y points down: a positive angle turns (1, 0) towards (0, −1)
    assert_point(&p.loxodromic_shift(&origin, &inf, FRAC_PI_2, 0.0), 0.0, -1.0);
    assert_point(&p.loxodromic_shift(&origin, &inf, 0.0, LN_2), 2.0, 0.0);
    assert_point(&p.loxodromic_shift(&origin, &inf, FRAC_PI_2, 3f64.ln()), 0.0, -3.0);

    let c = as_circle(&gc_circle(1.0, 0.0, 0.5).loxodromic_shift(&origin, &inf, FRAC_PI_2, LN_2));
    assert!(close(c.x(), 0.0) && close(c.y(), -2.0) && close(c.radius(), 1.0));
    assert!(c.is_ccw());
}

#[test]
fn loxodromic_shift_keeps_fixed_points() {
    let start = gc_point(-1.0, 0.0);
    let end = gc_point(1.0, 0.0);
    assert_point(
        &gc_point(0.0, 0.0).loxodromic_shift(&start, &end, FRAC_PI_2, 0.0),
        0.0,
        -1.0,
    );
    assert_point(&end.loxodromic_shift(&start, &end, 1.0, 0.5), 1.0, 0.0);
    assert_point(&start.loxodromic_shift(&start, &end, 1.0, 0.5), -1.0, 0.0);
}
