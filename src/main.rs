use std::env;
use std::process;
use std::str::FromStr;

use ecc_group::{CurveParameters, EllipticCurve, GroupError, Point, ValidationError};
use num_bigint_dig::BigInt;
use rand::seq::SliceRandom;

const RANDOM_SUMS: usize = 5;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("usage: ecc-group <modulo> <A> <B> [-x X -y Y]")]
    Usage,
    #[error("both (x, y) must be provided to make sense")]
    PartialStart,
    #[error("{name} coordinate must be an integer, got {value:?}")]
    Coordinate { name: &'static str, value: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Group(#[from] GroupError),
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    modulo: String,
    a: String,
    b: String,
    x: Option<String>,
    y: Option<String>,
}

fn main() {
    if let Err(err) = run(env::args().skip(1)) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), DemoError> {
    let args = parse_args(args)?;
    let curve = EllipticCurve::new(CurveParameters::from_strs(&args.modulo, &args.a, &args.b)?);
    let points: Vec<Point> = curve.points().iter().cloned().collect();
    let mut rng = rand::thread_rng();

    let start = match (&args.x, &args.y) {
        (None, None) => points.choose(&mut rng).cloned().unwrap_or(Point::Identity),
        (Some(x), Some(y)) => Point::new(coordinate("x", x)?, coordinate("y", y)?),
        _ => return Err(DemoError::PartialStart),
    };

    println!("Curve: {}", curve.params());
    println!();

    for (index, point) in curve.generate_orbit(&start)?.enumerate() {
        println!("{}P: {}", index + 1, point);
    }
    println!();

    for _ in 0..RANDOM_SUMS {
        let (Some(p), Some(q)) = (points.choose(&mut rng), points.choose(&mut rng)) else {
            break;
        };
        println!("{} + {} = {}", p, q, curve.add(p, q)?);
    }
    println!();

    for point in curve.points() {
        println!("Start: {}, Order: {}", point, curve.order(point)?);
    }
    println!();

    println!("Order of the Group: {}", curve.group_order());

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, DemoError> {
    let mut parsed = Args::default();
    let mut positional = Vec::with_capacity(3);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-x" => parsed.x = Some(args.next().ok_or(DemoError::Usage)?),
            "-y" => parsed.y = Some(args.next().ok_or(DemoError::Usage)?),
            "-h" | "--help" => return Err(DemoError::Usage),
            _ => positional.push(arg),
        }
    }

    let [modulo, a, b]: [String; 3] = positional.try_into().map_err(|_| DemoError::Usage)?;
    parsed.modulo = modulo;
    parsed.a = a;
    parsed.b = b;

    Ok(parsed)
}

fn coordinate(name: &'static str, value: &str) -> Result<BigInt, DemoError> {
    BigInt::from_str(value.trim()).map_err(|_| DemoError::Coordinate {
        name,
        value: value.to_owned(),
    })
}
