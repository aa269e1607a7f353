use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod detour;
mod error;
mod geo;
mod prompt;

use detour::{calculate_detour, Stop};
use geo::Coordinate;
use prompt::Prompter;

#[derive(Parser, Debug)]
#[command(name = "detour")]
#[command(about = "Shortest detour (miles) when driver A->B and driver C->D share a ride. Points not given as flags are prompted for.", long_about = None)]
struct Cli {
    /// Point A (driver one's pickup) as LAT,LON
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    a: Option<Coordinate>,

    /// Point B (driver one's dropoff) as LAT,LON
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    b: Option<Coordinate>,

    /// Point C (driver two's pickup) as LAT,LON
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    c: Option<Coordinate>,

    /// Point D (driver two's dropoff) as LAT,LON
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    d: Option<Coordinate>,

    /// Log route totals to stderr (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn given(&self, stop: Stop) -> Option<Coordinate> {
        match stop {
            Stop::A => self.a,
            Stop::B => self.b,
            Stop::C => self.c,
            Stop::D => self.d,
        }
    }
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {:?}", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("{:?} is not a number: {}", v, e))
    };
    Ok(Coordinate::new(parse(lat)?, parse(lon)?))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prompts on `output` for any point not given as a flag, then writes the
/// result line. Out of range coordinates still return `Ok`.
fn run(cli: &Cli, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut prompter = Prompter::new(input, &mut output);

    let mut points = Vec::with_capacity(Stop::ALL.len());
    for stop in Stop::ALL {
        let point = match cli.given(stop) {
            Some(point) => point,
            None => prompter
                .ask_point(stop)
                .with_context(|| format!("reading point {}", stop))?,
        };
        points.push(point);
    }

    match calculate_detour(points[0], points[1], points[2], points[3]) {
        Ok(detour) => {
            info!(driver = %detour.driver, "shortest detour found");
            writeln!(
                output,
                "The shortest distance between the given points is: {:.2} miles.",
                detour.miles
            )?;
        }
        Err(_) => writeln!(output, "ERROR: Invalid coordinates")?,
    }
    output.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(&cli, io::stdin().lock(), io::stdout().lock())
}
