//! Prints the intersection of two circles.
//!
//! Usage:
//! ```text
//! cargo run --example intersect                          # (0,0) r=2 with (1,1) r=3
//! cargo run --example intersect -- 0 0 2 5 0 3 lr        # x1 y1 r1 x2 y2 r2 [lr|l|r]
//! RUST_LOG=circint=trace cargo run --example intersect   # show derived tolerance
//! ```

use circint::math::Point2;
use circint::{intersect, CircintError, Side};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for circint.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("circint=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (values, side) = if args.is_empty() {
        ([0.0, 0.0, 2.0, 1.0, 1.0, 3.0], Side::Both)
    } else {
        parse_args(&args)?
    };
    let [x1, y1, r1, x2, y2, r2] = values;

    match intersect(Point2::new(x1, y1), r1, Point2::new(x2, y2), r2, side) {
        Ok(hit) => {
            println!("kind: {:?}", hit.kind());
            for p in hit.points() {
                println!("{:.12} {:.12}", p.x, p.y);
            }
            Ok(())
        }
        Err(CircintError::Geometry(e)) => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn parse_args(args: &[String]) -> Result<([f64; 6], Side), Box<dyn std::error::Error>> {
    if !(6..=7).contains(&args.len()) {
        return Err("expected: x1 y1 r1 x2 y2 r2 [lr|l|r]".into());
    }
    let mut values = [0.0; 6];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = arg.parse()?;
    }
    let side = match args.get(6) {
        Some(s) => s.parse()?,
        None => Side::Both,
    };
    Ok((values, side))
}
