//! Conversions between the Euclidean primitives and homogeneous vectors.

use super::GeneralizedCircle;
use crate::cfg::{KernelCfg, EPSILON, EPSILON2};
use crate::error::Result;
use crate::primitives::{Circle, CircleOrLine, GCircle, ImaginaryCircle, Line, Point};

impl GeneralizedCircle {
    /// Normalized upcast. Circle orientation is carried by the sign of `w`.
    pub fn from_gcircle(gcircle: &GCircle) -> GeneralizedCircle {
        match *gcircle {
            GCircle::Circle(c) => {
                let sign = if c.is_ccw() { 1.0 } else { -1.0 };
                let w = sign / c.radius();
                GeneralizedCircle::raw(
                    w,
                    w * c.x(),
                    w * c.y(),
                    w * ((c.x() * c.x() + c.y() * c.y() - c.r2()) / 2.0),
                )
            }
            // a·x + b·y + c = 0  ->  a·e_x + b·e_y − c·e_∞
            GCircle::Line(l) => {
                GeneralizedCircle::raw(0.0, l.a(), l.b(), -l.c()).normalized_preserving_direction()
            }
            GCircle::Point(p) if p.is_infinity() => GeneralizedCircle::CONFORMAL_INFINITY,
            // already null with w = 1
            GCircle::Point(p) => GeneralizedCircle::raw(1.0, p.x, p.y, (p.x * p.x + p.y * p.y) / 2.0),
            GCircle::Imaginary(c) => GeneralizedCircle::raw(
                1.0,
                c.x(),
                c.y(),
                (c.x() * c.x() + c.y() * c.y() + c.radius() * c.radius()) / 2.0,
            )
            .normalized_preserving_direction(),
        }
    }

    pub fn from_circle_or_line(c: &CircleOrLine) -> GeneralizedCircle {
        Self::from_gcircle(&GCircle::from(*c))
    }

    /// Classify and downcast: infinity, line, real circle (orientation from
    /// `sign(w)`), imaginary circle or point. Assumes normalization; fails only
    /// on non-finite coordinates.
    pub fn to_gcircle(&self) -> Result<GCircle> {
        if self.w.abs() < EPSILON {
            return if self.x.abs() < EPSILON && self.y.abs() < EPSILON {
                Ok(Point::CONFORMAL_INFINITY.into())
            } else {
                Ok(Line::new(self.x, self.y, -self.z)?.into())
            };
        }
        let x0 = self.x / self.w;
        let y0 = self.y / self.w;
        let r2 = x0 * x0 + y0 * y0 - 2.0 * self.z / self.w;
        if r2 >= EPSILON2 {
            Ok(Circle::new(x0, y0, r2.sqrt(), self.w >= 0.0)?.into())
        } else if r2 <= -EPSILON2 {
            Ok(ImaginaryCircle::new(x0, y0, r2.abs().sqrt())?.into())
        } else {
            Ok(Point::try_new(x0, y0)?.into())
        }
    }

    /// [`GeneralizedCircle::to_gcircle_as_with`] with the default configuration.
    pub fn to_gcircle_as(&self, same_kind_as: &GCircle) -> Option<GCircle> {
        self.to_gcircle_as_with(&KernelCfg::default(), same_kind_as)
    }

    /// Downcast constrained to the kind of `same_kind_as`: points stay points,
    /// circles/lines stay circles/lines, imaginary circles stay imaginary.
    /// `None` when the numbers cannot honor the requested kind.
    ///
    /// Points further than `√cfg.far_point_d2` from the origin become infinity;
    /// large radius fluctuations make such points meaningless anyway.
    pub fn to_gcircle_as_with(&self, cfg: &KernelCfg, same_kind_as: &GCircle) -> Option<GCircle> {
        if self.w.abs() < EPSILON {
            return if self.x.abs() < EPSILON && self.y.abs() < EPSILON {
                match same_kind_as {
                    GCircle::Point(_) => Some(Point::CONFORMAL_INFINITY.into()),
                    _ => None,
                }
            } else {
                match same_kind_as {
                    GCircle::Circle(_) | GCircle::Line(_) => {
                        Line::new(self.x, self.y, -self.z).ok().map(GCircle::from)
                    }
                    _ => None,
                }
            };
        }
        let x0 = self.x / self.w;
        let y0 = self.y / self.w;
        let d2 = x0 * x0 + y0 * y0;
        let r2 = d2 - 2.0 * self.z / self.w;
        match same_kind_as {
            GCircle::Point(_) => {
                if d2 > cfg.far_point_d2 {
                    Some(Point::CONFORMAL_INFINITY.into())
                } else {
                    Point::try_new(x0, y0).ok().map(GCircle::from)
                }
            }
            GCircle::Circle(_) | GCircle::Line(_) => {
                if r2 >= EPSILON2 {
                    Circle::new(x0, y0, r2.sqrt(), self.w >= 0.0)
                        .ok()
                        .map(GCircle::from)
                } else {
                    None
                }
            }
            GCircle::Imaginary(_) => {
                if r2 <= -EPSILON2 {
                    ImaginaryCircle::new(x0, y0, r2.abs().sqrt())
                        .ok()
                        .map(GCircle::from)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_conformal_infinity(&self) -> bool {
        let n = self.normalized_preserving_direction();
        n.w.abs() < EPSILON && n.x.abs() < EPSILON && n.y.abs() < EPSILON
    }

    pub fn is_line(&self) -> bool {
        let n = self.normalized_preserving_direction();
        !n.at_infinity() && n.w.abs() < EPSILON
    }

    /// Includes infinity.
    pub fn is_point(&self) -> bool {
        let n = self.normalized_preserving_direction();
        n.at_infinity() || (n.w.abs() >= EPSILON && n.r2().abs() < EPSILON2)
    }

    pub fn is_real_circle(&self) -> bool {
        let n = self.normalized_preserving_direction();
        !n.at_infinity() && n.w.abs() >= EPSILON && n.r2() >= EPSILON2
    }

    pub fn is_imaginary_circle(&self) -> bool {
        let n = self.normalized_preserving_direction();
        !n.at_infinity() && n.w.abs() >= EPSILON && n.r2() <= -EPSILON2
    }

    #[inline]
    fn at_infinity(&self) -> bool {
        self.w.abs() < EPSILON && self.x.abs() < EPSILON && self.y.abs() < EPSILON
    }
}

impl From<GCircle> for GeneralizedCircle {
    fn from(g: GCircle) -> Self {
        GeneralizedCircle::from_gcircle(&g)
    }
}

impl From<Circle> for GeneralizedCircle {
    fn from(c: Circle) -> Self {
        GeneralizedCircle::from_gcircle(&c.into())
    }
}

impl From<Line> for GeneralizedCircle {
    fn from(l: Line) -> Self {
        GeneralizedCircle::from_gcircle(&l.into())
    }
}

impl From<Point> for GeneralizedCircle {
    fn from(p: Point) -> Self {
        GeneralizedCircle::from_gcircle(&p.into())
    }
}
