use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod ops;
mod provenance;
mod shape;

use ops::Op;
use shape::{parse_shape, Shape};

#[derive(Parser)]
#[command(name = "inversive")]
#[command(about = "Inversive-geometry kernel on the command line; shapes are kind-tagged JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Ordered intersection points of two circles/lines
    Intersect {
        #[arg(long, value_parser = parse_shape)]
        a: Shape,
        #[arg(long, value_parser = parse_shape)]
        b: Shape,
    },
    /// Invert any shape in a circle (reflect when the engine is a line)
    Invert {
        #[arg(long, value_parser = parse_shape)]
        engine: Shape,
        #[arg(long, value_parser = parse_shape)]
        target: Shape,
    },
    /// Pencil n-sector between two shapes
    Bisect {
        #[arg(long, value_parser = parse_shape)]
        a: Shape,
        #[arg(long, value_parser = parse_shape)]
        b: Shape,
        #[arg(long, default_value_t = 2)]
        sections: u32,
        #[arg(long, default_value_t = 1)]
        index: u32,
        /// Branch by pencil type instead of the continuous rotor bisector
        #[arg(long)]
        naive: bool,
        /// With --naive: take the sectors between the two shapes
        #[arg(long)]
        in_between: bool,
    },
    /// Apply the composition of two inversions `speed` times
    BiInversion {
        #[arg(long, value_parser = parse_shape)]
        engine1: Shape,
        #[arg(long, value_parser = parse_shape)]
        engine2: Shape,
        #[arg(long, value_parser = parse_shape)]
        target: Shape,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        speed: f64,
    },
    /// Loxodromic (spiral) motion with two fixed points
    Loxodromic {
        #[arg(long, value_parser = parse_shape)]
        start: Shape,
        #[arg(long, value_parser = parse_shape)]
        end: Shape,
        #[arg(long, value_parser = parse_shape)]
        target: Shape,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        log_dilation: f64,
    },
    /// Locate a point relative to a circle/line: IN, OUT or BORDERING
    Locate {
        #[arg(long, value_parser = parse_shape)]
        shape: Shape,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Evaluate a JSON list of ops and write results plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the kernel version and tolerances as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let op = match cmd.action {
        Action::Batch { input, out } => return batch(&input, &out),
        Action::Report => return report(),
        Action::Intersect { a, b } => Op::Intersect { a, b },
        Action::Invert { engine, target } => Op::Invert { engine, target },
        Action::Bisect {
            a,
            b,
            sections,
            index,
            naive,
            in_between,
        } => Op::Bisect {
            a,
            b,
            sections,
            index,
            naive,
            in_between,
        },
        Action::BiInversion {
            engine1,
            engine2,
            target,
            speed,
        } => Op::BiInversion {
            engine1,
            engine2,
            target,
            speed,
        },
        Action::Loxodromic {
            start,
            end,
            target,
            angle,
            log_dilation,
        } => Op::Loxodromic {
            start,
            end,
            target,
            angle,
            log_dilation,
        },
        Action::Locate { shape, x, y } => Op::Locate { shape, x, y },
    };
    single(&op)
}

fn single(op: &Op) -> Result<()> {
    tracing::info!(op = op.name(), params = ?op, "eval");
    let out = op.eval().with_context(|| format!("evaluating {}", op.name()))?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn batch(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let ops: Vec<Op> =
        serde_json::from_str(&text).with_context(|| format!("parsing ops in {}", input.display()))?;
    let results = ops::eval_all(&ops);
    let failed = results.iter().filter(|r| r["ok"] == false).count();
    tracing::info!(ops = ops.len(), failed, "batch_done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&Value::from(results))?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(json!({
        "input": input.to_string_lossy(),
        "n_ops": ops.len(),
        "failed": failed,
    }))
    .with_ops(ops.iter().map(Op::name));
    let prov_path = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov_path.display(), "provenance_written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "kernel": provenance::kernel_info(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
