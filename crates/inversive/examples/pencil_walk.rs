//! Walk the pencil spanned by two random circles/lines and print each step.
//!
//! Usage:
//!   cargo run -p inversive --example pencil_walk -- [steps] [seed]
//!
//! Prints the pencil type, the continuous n-sectors between the two shapes,
//! and where their intersection points go under the inversion in the first.

use inversive::conformal::GeneralizedCircle;
use inversive::intersect::intersection_points;
use inversive::rand::{draw_circles_or_lines, ReplayToken, SampleCfg};
use inversive::rotor::invert;

fn main() {
    let mut args = std::env::args().skip(1);
    let steps: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let shapes = draw_circles_or_lines(SampleCfg::default(), ReplayToken::new(seed, 0), 2);
    let (a, b) = (shapes[0], shapes[1]);
    println!("a = {a:?}\nb = {b:?}");

    let (ga, gb) = (
        GeneralizedCircle::from_circle_or_line(&a),
        GeneralizedCircle::from_circle_or_line(&b),
    );
    println!("pencil: {:?}", ga.pencil_type(&gb));
    for k in 0..=steps {
        match ga.bisector(&gb, steps, k).map(|g| g.to_gcircle()) {
            Some(Ok(shape)) => println!("  sector {k}/{steps}: {shape:?}"),
            Some(Err(err)) => println!("  sector {k}/{steps}: {err}"),
            None => println!("  sector {k}/{steps}: degenerate"),
        }
    }

    for p in intersection_points(&a, &b) {
        match invert(&a, &p.into()) {
            Ok(image) => println!("  {p:?} -> {image:?}"),
            Err(err) => println!("  {p:?} -> {err}"),
        }
    }
}
