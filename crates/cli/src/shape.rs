//! JSON shapes exchanged on the command line and in batch files.
//!
//! Encoding is `kind`-tagged: `{"kind": "circle", "x": 0, "y": 0, "r": 1, "ccw": true}`,
//! `{"kind": "line", "a": 1, "b": 0, "c": 0}`, `{"kind": "point", "x": 1, "y": 2}`,
//! `{"kind": "infinity"}`, `{"kind": "imaginary", "x": 0, "y": 0, "r": 1}`.

use anyhow::{anyhow, Context, Result};
use inversive::conformal::GeneralizedCircle;
use inversive::primitives::{Circle, CircleOrLine, GCircle, ImaginaryCircle, Line, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle {
        x: f64,
        y: f64,
        r: f64,
        #[serde(default = "default_ccw")]
        ccw: bool,
    },
    Line {
        a: f64,
        b: f64,
        c: f64,
    },
    Point {
        x: f64,
        y: f64,
    },
    Infinity,
    Imaginary {
        x: f64,
        y: f64,
        r: f64,
    },
}

fn default_ccw() -> bool {
    true
}

/// clap value parser: a shape given as inline JSON.
pub fn parse_shape(s: &str) -> Result<Shape> {
    serde_json::from_str(s).with_context(|| format!("parsing shape {s}"))
}

impl Shape {
    pub fn to_gcircle(self) -> Result<GCircle> {
        Ok(match self {
            Shape::Circle { x, y, r, ccw } => Circle::new(x, y, r, ccw)?.into(),
            Shape::Line { a, b, c } => Line::new(a, b, c)?.into(),
            Shape::Point { x, y } => Point::try_new(x, y)?.into(),
            Shape::Infinity => Point::CONFORMAL_INFINITY.into(),
            Shape::Imaginary { x, y, r } => ImaginaryCircle::new(x, y, r)?.into(),
        })
    }

    /// Only circles and lines bound a region.
    pub fn to_circle_or_line(self) -> Result<CircleOrLine> {
        self.to_gcircle()?
            .as_circle_or_line()
            .ok_or_else(|| anyhow!("expected a circle or a line, got {self:?}"))
    }

    pub fn to_generalized(self) -> Result<GeneralizedCircle> {
        Ok(GeneralizedCircle::from_gcircle(&self.to_gcircle()?))
    }
}

impl From<GCircle> for Shape {
    fn from(g: GCircle) -> Self {
        match g {
            GCircle::Point(p) if p.is_infinity() => Shape::Infinity,
            GCircle::Point(p) => Shape::Point { x: p.x, y: p.y },
            GCircle::Line(l) => Shape::Line {
                a: l.a(),
                b: l.b(),
                c: l.c(),
            },
            GCircle::Circle(c) => Shape::Circle {
                x: c.x(),
                y: c.y(),
                r: c.radius(),
                ccw: c.is_ccw(),
            },
            GCircle::Imaginary(c) => Shape::Imaginary {
                x: c.x(),
                y: c.y(),
                r: c.radius(),
            },
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        GCircle::from(p).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind() {
        let circle = parse_shape(r#"{"kind": "circle", "x": 1, "y": 2, "r": 3}"#).unwrap();
        assert_eq!(
            circle,
            Shape::Circle {
                x: 1.0,
                y: 2.0,
                r: 3.0,
                ccw: true
            }
        );
        assert!(parse_shape(r#"{"kind": "line", "a": 1, "b": 0, "c": 0}"#).is_ok());
        assert!(parse_shape(r#"{"kind": "point", "x": 1, "y": 0}"#).is_ok());
        assert_eq!(parse_shape(r#"{"kind": "infinity"}"#).unwrap(), Shape::Infinity);
        assert!(parse_shape(r#"{"kind": "imaginary", "x": 0, "y": 0, "r": 1}"#).is_ok());
        assert!(parse_shape(r#"{"kind": "ellipse"}"#).is_err());
    }

    #[test]
    fn invalid_geometry_is_an_error() {
        let zero_radius = Shape::Circle {
            x: 0.0,
            y: 0.0,
            r: 0.0,
            ccw: true,
        };
        assert!(zero_radius.to_gcircle().is_err());
        assert!(Shape::Line {
            a: 0.0,
            b: 0.0,
            c: 1.0
        }
        .to_gcircle()
        .is_err());
        assert!(Shape::Point { x: 0.0, y: 0.0 }.to_circle_or_line().is_err());
    }

    #[test]
    fn kernel_values_round_trip() {
        let shapes = [
            Shape::Circle {
                x: 1.0,
                y: -1.0,
                r: 2.0,
                ccw: false,
            },
            Shape::Line {
                a: 0.6,
                b: 0.8,
                c: -1.0,
            },
            Shape::Point { x: 3.0, y: 4.0 },
            Shape::Infinity,
            Shape::Imaginary {
                x: 0.0,
                y: 1.0,
                r: 0.5,
            },
        ];
        for shape in shapes {
            assert_eq!(Shape::from(shape.to_gcircle().unwrap()), shape);
        }
        let json = serde_json::to_string(&Shape::Infinity).unwrap();
        assert_eq!(json, r#"{"kind":"infinity"}"#);
    }
}
