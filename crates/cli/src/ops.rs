//! Kernel operations as JSON values, shared by the subcommands and `batch`.

use anyhow::{Context, Result};
use inversive::conformal::GeneralizedCircle;
use inversive::intersect::intersection_points;
use inversive::primitives::{Point, RegionPointLocation};
use inversive::rotor::invert;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::shape::Shape;

fn default_sections() -> u32 {
    2
}

fn default_index() -> u32 {
    1
}

/// One kernel call; `op`-tagged in batch files, e.g.
/// `{"op": "invert", "engine": {..}, "target": {..}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Op {
    Intersect {
        a: Shape,
        b: Shape,
    },
    Invert {
        engine: Shape,
        target: Shape,
    },
    Bisect {
        a: Shape,
        b: Shape,
        #[serde(default = "default_sections")]
        sections: u32,
        #[serde(default = "default_index")]
        index: u32,
        #[serde(default)]
        naive: bool,
        #[serde(default)]
        in_between: bool,
    },
    BiInversion {
        engine1: Shape,
        engine2: Shape,
        target: Shape,
        speed: f64,
    },
    Loxodromic {
        start: Shape,
        end: Shape,
        target: Shape,
        angle: f64,
        log_dilation: f64,
    },
    Locate {
        shape: Shape,
        x: f64,
        y: f64,
    },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Intersect { .. } => "intersect",
            Op::Invert { .. } => "invert",
            Op::Bisect { .. } => "bisect",
            Op::BiInversion { .. } => "bi-inversion",
            Op::Loxodromic { .. } => "loxodromic",
            Op::Locate { .. } => "locate",
        }
    }

    pub fn eval(&self) -> Result<Value> {
        match *self {
            Op::Intersect { a, b } => {
                let points = intersection_points(&a.to_circle_or_line()?, &b.to_circle_or_line()?);
                if points.is_empty() {
                    tracing::warn!(?a, ?b, "no intersection");
                }
                let points: Vec<Shape> = points.into_iter().map(Shape::from).collect();
                Ok(json!({ "points": points }))
            }
            Op::Invert { engine, target } => {
                let image = invert(&engine.to_circle_or_line()?, &target.to_gcircle()?)
                    .context("inverting target")?;
                Ok(json!({ "result": Shape::from(image) }))
            }
            Op::Bisect {
                a,
                b,
                sections,
                index,
                naive,
                in_between,
            } => {
                let (ga, gb) = (a.to_generalized()?, b.to_generalized()?);
                let bisector = if naive {
                    ga.naive_bisector(&gb, sections, index, in_between)
                } else {
                    ga.bisector(&gb, sections, index)
                };
                match bisector {
                    Some(g) => Ok(json!({ "result": to_shape(&g)? })),
                    None => {
                        tracing::warn!(?a, ?b, sections, index, "degenerate bisector");
                        Ok(json!({ "result": Value::Null }))
                    }
                }
            }
            Op::BiInversion {
                engine1,
                engine2,
                target,
                speed,
            } => {
                let image = target.to_generalized()?.bi_inversion(
                    &engine1.to_generalized()?,
                    &engine2.to_generalized()?,
                    speed,
                );
                Ok(json!({ "result": to_shape(&image)? }))
            }
            Op::Loxodromic {
                start,
                end,
                target,
                angle,
                log_dilation,
            } => {
                let image = target.to_generalized()?.loxodromic_shift(
                    &start.to_generalized()?,
                    &end.to_generalized()?,
                    angle,
                    log_dilation,
                );
                Ok(json!({ "result": to_shape(&image)? }))
            }
            Op::Locate { shape, x, y } => {
                let point = Point::try_new(x, y)?;
                let location = match shape.to_circle_or_line()?.calculate_location_epsilon(&point) {
                    RegionPointLocation::In => "IN",
                    RegionPointLocation::Bordering => "BORDERING",
                    RegionPointLocation::Out => "OUT",
                };
                Ok(json!({ "location": location }))
            }
        }
    }
}

fn to_shape(g: &GeneralizedCircle) -> Result<Shape> {
    let shape = g
        .normalized_preserving_direction()
        .to_gcircle()
        .with_context(|| format!("converting {:?} back to a shape", g.coords()))?;
    Ok(shape.into())
}

/// Evaluate every op; failures are recorded per entry instead of aborting.
pub fn eval_all(ops: &[Op]) -> Vec<Value> {
    ops.iter()
        .map(|op| match op.eval() {
            Ok(out) => json!({ "op": op.name(), "ok": true, "output": out }),
            Err(err) => {
                tracing::warn!(op = op.name(), error = %format!("{err:#}"), "op failed");
                json!({ "op": op.name(), "ok": false, "error": format!("{err:#}") })
            }
        })
        .collect()
}
