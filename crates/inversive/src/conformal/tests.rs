use super::*;
use crate::cfg::KernelCfg;
use crate::primitives::{Circle, GCircle, ImaginaryCircle, Line, Point};
use crate::rand::{draw_circle, draw_generalized_circle, ReplayToken, SampleCfg};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, LN_2};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn close_gc(a: &GeneralizedCircle, b: &GeneralizedCircle, eps: f64) -> bool {
    a.coords()
        .iter()
        .zip(b.coords().iter())
        .all(|(u, v)| (u - v).abs() < eps)
}

fn gc_circle(x: f64, y: f64, r: f64, ccw: bool) -> GeneralizedCircle {
    Circle::new(x, y, r, ccw).unwrap().into()
}

fn gc_line(a: f64, b: f64, c: f64) -> GeneralizedCircle {
    Line::new(a, b, c).unwrap().into()
}

fn gc_point(x: f64, y: f64) -> GeneralizedCircle {
    Point::new(x, y).into()
}

#[test]
fn init_rejects_zero_and_non_finite() {
    assert!(GeneralizedCircle::new(0.0, 0.0, 0.0, 0.0).is_err());
    assert!(GeneralizedCircle::new(f64::NAN, 0.0, 0.0, 1.0).is_err());
    assert!(GeneralizedCircle::new(1.0, f64::INFINITY, 0.0, 1.0).is_err());
    assert!(GeneralizedCircle::new(0.0, 0.0, 0.0, 1.0).is_ok());
}

#[test]
fn kind_predicates() {
    let inf = GeneralizedCircle::CONFORMAL_INFINITY;
    assert!(inf.is_conformal_infinity());
    assert!(inf.is_point());
    assert!(!inf.is_line());

    let p = gc_point(1.0, 2.0);
    assert!(p.is_point());
    assert!(!p.is_real_circle());
    assert!(!p.is_conformal_infinity());

    let l = gc_line(1.0, 1.0, 3.0);
    assert!(l.is_line());
    assert!(!l.is_point());
    assert!(!l.is_real_circle());

    let c = gc_circle(1.0, 2.0, 3.0, false);
    assert!(c.is_real_circle());
    assert!(!c.is_imaginary_circle());
    assert!(!c.is_line());

    let i: GeneralizedCircle = GCircle::from(ImaginaryCircle::new(1.0, 2.0, 3.0).unwrap()).into();
    assert!(i.is_imaginary_circle());
    assert!(!i.is_real_circle());
    // predicates normalize on their own
    assert!((c * 7.0).is_real_circle());
    assert!((l * 0.01).is_line());
}

#[test]
fn norms_and_radii() {
    let c = gc_circle(1.0, 2.0, 3.0, true);
    assert!(close(c.norm2(), 1.0));
    assert!(close(c.r2(), 9.0));
    let cw = gc_circle(1.0, 2.0, 3.0, false);
    assert!(close(cw.norm(), 1.0));
    assert!(cw.w() < 0.0);
    assert!(close(gc_point(3.0, -4.0).norm2(), 0.0));
    assert!(close(gc_point(3.0, -4.0).r2(), 0.0));
    assert!(close(gc_line(3.0, 4.0, 1.0).norm(), 1.0));
    assert_eq!(gc_line(3.0, 4.0, 1.0).r2(), f64::INFINITY);
    assert_eq!(GeneralizedCircle::CONFORMAL_INFINITY.r2(), 0.0);
    let i: GeneralizedCircle = GCircle::from(ImaginaryCircle::new(0.0, 0.0, 2.0).unwrap()).into();
    assert!(close(i.r2(), -4.0));
    assert!(close(i.norm2(), -1.0));
}

#[test]
fn conversion_round_trip() {
    let shapes: Vec<GCircle> = vec![
        Circle::new(1.0, 2.0, 3.0, true).unwrap().into(),
        Circle::new(-4.0, 0.5, 0.25, false).unwrap().into(),
        Line::new(1.0, -2.0, 3.0).unwrap().normalized().into(),
        Point::new(5.0, -1.0).into(),
        Point::CONFORMAL_INFINITY.into(),
        ImaginaryCircle::new(0.5, 0.5, 2.0).unwrap().into(),
    ];
    for shape in shapes {
        let back = GeneralizedCircle::from_gcircle(&shape).to_gcircle().unwrap();
        assert!(back.same_kind_as(&shape), "{shape:?} -> {back:?}");
        match (shape, back) {
            (GCircle::Circle(a), GCircle::Circle(b)) => {
                assert!(close(a.x(), b.x()) && close(a.y(), b.y()));
                assert!(close(a.radius(), b.radius()));
                assert_eq!(a.is_ccw(), b.is_ccw());
            }
            (GCircle::Line(a), GCircle::Line(b)) => {
                assert!(close(a.a(), b.a()) && close(a.b(), b.b()) && close(a.c(), b.c()));
            }
            (GCircle::Point(a), GCircle::Point(b)) => {
                assert!(a == b || a.distance_from(&b) < 1e-9);
            }
            (GCircle::Imaginary(a), GCircle::Imaginary(b)) => {
                assert!(close(a.x(), b.x()) && close(a.y(), b.y()));
                assert!(close(a.radius(), b.radius()));
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn scalar_product_with_point_encodes_inside() {
    let ccw = gc_circle(0.0, 0.0, 2.0, true);
    let cw = gc_circle(0.0, 0.0, 2.0, false);
    let inner = gc_point(0.5, 0.5);
    let outer = gc_point(3.0, 0.0);
    assert!(ccw.scalar_product(&inner) > 0.0);
    assert!(ccw.scalar_product(&outer) < 0.0);
    assert!(cw.scalar_product(&inner) < 0.0);
    assert!(cw.scalar_product(&outer) > 0.0);
    // a·x + b·y + c > 0 is the inside of a line
    let l = gc_line(1.0, 0.0, -1.0);
    assert!(l.scalar_product(&gc_point(2.0, 0.0)) > 0.0);
    assert!(l.scalar_product(&gc_point(0.0, 0.0)) < 0.0);
    assert!(close(l.scalar_product(&gc_point(1.0, 5.0)), 0.0));
}

#[test]
fn homogeneous_equality() {
    let c = gc_circle(1.0, 2.0, 3.0, true);
    assert!(c.homogeneous_equals(&(c * 3.0), 1e-9));
    assert!(!c.homogeneous_equals(&-c, 1e-9));
    assert!(!c.homogeneous_equals(&gc_circle(1.0, 2.0, 3.1, true), 1e-9));
}

#[test]
fn normalization() {
    let ccw = gc_circle(1.0, 2.0, 3.0, true);
    let cw = gc_circle(1.0, 2.0, 3.0, false);
    // canonical sign forgets orientation
    assert!(close_gc(&cw.normalized(), &ccw.normalized(), 1e-12));
    assert!(cw.normalized().w() > 0.0);
    // positive rescaling keeps it
    assert!(close_gc(&(cw * 5.0).normalized_preserving_direction(), &cw, 1e-12));
    assert!((cw * 5.0).normalized_preserving_direction().w() < 0.0);
    let p = gc_point(2.0, 3.0) * 4.0;
    assert!(close_gc(&p.normalized(), &gc_point(2.0, 3.0), 1e-12));
    let inf = GeneralizedCircle::CONFORMAL_INFINITY * 8.0;
    assert!(close_gc(&inf.normalized(), &GeneralizedCircle::CONFORMAL_INFINITY, 1e-12));
    assert!(close_gc(
        &inf.normalized_preserving_direction(),
        &GeneralizedCircle::CONFORMAL_INFINITY,
        1e-12
    ));
}

#[test]
fn normalized_preserving_direction_is_idempotent() {
    for index in 0..100 {
        let g = draw_generalized_circle(SampleCfg::default(), ReplayToken { seed: 5, index }) * 3.7;
        let once = g.normalized_preserving_direction();
        let twice = once.normalized_preserving_direction();
        assert!(close_gc(&once, &twice, 1e-12));
    }
}

#[test]
fn affine_combination_of_points() {
    let a = gc_point(0.0, 0.0);
    let b = gc_point(2.0, 0.0);
    let mid = a.affine_combination(&b, 0.5);
    // the sum of two distinct points is an imaginary circle, not a point
    assert!(close(mid.w(), 1.0));
    assert!(close(mid.norm2(), -1.0));
    assert!(mid.is_imaginary_circle());
    assert!(close_gc(&a.affine_combination(&b, 1.0), &a, 1e-12));
}

#[test]
fn pencil_types() {
    let a = gc_circle(0.0, 0.0, 1.0, true);
    assert_eq!(
        a.pencil_type(&gc_circle(1.0, 0.0, 1.0, true)),
        Some(CirclePencilType::Elliptic)
    );
    assert!(close(a.inversive_distance(&gc_circle(1.0, 0.0, 1.0, true)), 0.5));
    assert!(close(a.inversive_angle(&gc_circle(1.0, 0.0, 1.0, true)), FRAC_PI_3));
    // concentric
    let b = gc_circle(0.0, 0.0, 2.0, true);
    assert_eq!(a.pencil_type(&b), Some(CirclePencilType::Hyperbolic));
    assert!(close(a.inversive_distance(&b), 1.25));
    assert!(close(a.inversive_angle(&b), LN_2));
    // externally tangent
    assert_eq!(
        a.pencil_type(&gc_circle(2.0, 0.0, 1.0, true)),
        Some(CirclePencilType::Parabolic)
    );
    // parallel and perpendicular lines
    let l = gc_line(1.0, 0.0, 0.0);
    assert_eq!(
        l.pencil_type(&gc_line(1.0, 0.0, -1.0)),
        Some(CirclePencilType::Parabolic)
    );
    assert_eq!(
        l.pencil_type(&gc_line(0.0, 1.0, 0.0)),
        Some(CirclePencilType::Elliptic)
    );
    assert!(close(l.inversive_angle(&gc_line(0.0, 1.0, 0.0)), FRAC_PI_2));
    assert_eq!(a.pencil_type(&a), None);
    assert_eq!(a.inversive_angle(&a), 0.0);
}

#[test]
fn inversion_preserves_inversive_distance() {
    let cfg = SampleCfg {
        half_extent: 3.0,
        radius_min: 0.5,
        radius_max: 2.0,
        ..SampleCfg::default()
    };
    for index in 0..100 {
        let engine: GeneralizedCircle = draw_circle(cfg, ReplayToken { seed: 11, index }).into();
        let a = draw_generalized_circle(cfg, ReplayToken { seed: 12, index });
        let b = draw_generalized_circle(cfg, ReplayToken { seed: 13, index });
        let before = a.inversive_distance(&b);
        let after = engine.apply_to(&a).inversive_distance(&engine.apply_to(&b));
        assert!(
            (before - after).abs() < 1e-6 * before.abs().max(1.0),
            "index {index}: {before} vs {after}"
        );
    }
}

#[test]
fn inversion_is_an_involution() {
    let engine = gc_circle(1.0, 2.0, 3.0, true);
    let target = gc_circle(4.0, 1.0, 0.5, true);
    let back = engine.apply_to(&engine.apply_to(&target));
    assert!(close_gc(&back.normalized(), &target.normalized(), 1e-9));
}

#[test]
fn unit_circle_inversion_of_a_point() {
    let unit = gc_circle(0.0, 0.0, 1.0, true);
    let image = unit.apply_to(&gc_point(2.0, 0.0)).to_gcircle().unwrap();
    match image {
        GCircle::Point(p) => assert!(close(p.x, 0.5) && close(p.y, 0.0)),
        other => panic!("expected a point, got {other:?}"),
    }
    // center <-> infinity
    assert!(unit.apply_to(&gc_point(0.0, 0.0)).is_conformal_infinity());
}

#[test]
fn perp3_through_points() {
    let circle = GeneralizedCircle::perp3(&gc_point(1.0, 0.0), &gc_point(0.0, 1.0), &gc_point(-1.0, 0.0))
        .unwrap()
        .to_gcircle()
        .unwrap();
    match circle {
        GCircle::Circle(c) => {
            assert!(close(c.x(), 0.0) && close(c.y(), 0.0) && close(c.radius(), 1.0));
        }
        other => panic!("expected a circle, got {other:?}"),
    }
    // collinear points give their line
    let line =
        GeneralizedCircle::perp3(&gc_point(0.0, 0.0), &gc_point(1.0, 0.0), &gc_point(2.0, 0.0))
            .unwrap();
    assert!(line.is_line());
    assert!(close(line.scalar_product(&gc_point(7.0, 0.0)), 0.0));
}

#[test]
fn perp3_of_one_pencil_is_none() {
    // three lines through the origin
    assert_eq!(
        GeneralizedCircle::perp3(
            &gc_line(1.0, 0.0, 0.0),
            &gc_line(0.0, 1.0, 0.0),
            &gc_line(1.0, 1.0, 0.0)
        ),
        None
    );
}

#[test]
fn parallel2perp1_picks_the_perpendicular_member() {
    // pencil of (0, 0) and (2, 0) contains the bisecting line x = 1
    let m = GeneralizedCircle::parallel2perp1(&gc_point(0.0, 0.0), &gc_point(2.0, 0.0), &gc_point(1.0, 5.0))
        .unwrap();
    assert!(m.is_line());
    assert!(close(m.scalar_product(&gc_point(1.0, 7.0)), 0.0));
    assert!(close(m.scalar_product(&gc_point(1.0, 5.0)), 0.0));
}

#[test]
fn to_gcircle_as_keeps_kind() {
    let p = GCircle::from(Point::new(0.0, 0.0));
    let c = GCircle::from(Circle::ccw(0.0, 0.0, 1.0).unwrap());
    let l = GCircle::from(Line::new(1.0, 0.0, 0.0).unwrap());
    let i = GCircle::from(ImaginaryCircle::new(0.0, 0.0, 1.0).unwrap());

    let circle = gc_circle(1.0, 1.0, 2.0, false);
    assert!(matches!(circle.to_gcircle_as(&c), Some(GCircle::Circle(x)) if !x.is_ccw()));
    assert!(matches!(circle.to_gcircle_as(&l), Some(GCircle::Circle(_))));
    assert_eq!(circle.to_gcircle_as(&i), None);

    let line = gc_line(1.0, 1.0, 0.0);
    assert!(matches!(line.to_gcircle_as(&c), Some(GCircle::Line(_))));
    assert_eq!(line.to_gcircle_as(&p), None);

    let point = gc_point(3.0, 4.0);
    assert_eq!(point.to_gcircle_as(&p), Some(GCircle::Point(Point::new(3.0, 4.0))));
    assert_eq!(point.to_gcircle_as(&c), None);

    let inf = GeneralizedCircle::CONFORMAL_INFINITY;
    assert_eq!(inf.to_gcircle_as(&p), Some(GCircle::Point(Point::CONFORMAL_INFINITY)));
    assert_eq!(inf.to_gcircle_as(&l), None);

    let imaginary: GeneralizedCircle = i.into();
    assert!(matches!(imaginary.to_gcircle_as(&i), Some(GCircle::Imaginary(_))));
    assert_eq!(imaginary.to_gcircle_as(&c), None);
}

#[test]
fn far_points_clamp_to_infinity() {
    let p = GCircle::from(Point::new(0.0, 0.0));
    let far = gc_point(2_000.0, 0.0);
    assert_eq!(far.to_gcircle_as(&p), Some(GCircle::Point(Point::new(2_000.0, 0.0))));
    let strict = KernelCfg { far_point_d2: 1e6 };
    assert_eq!(
        far.to_gcircle_as_with(&strict, &p),
        Some(GCircle::Point(Point::CONFORMAL_INFINITY))
    );
}
