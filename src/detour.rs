// Shortest detour between two rides: driver one goes A -> B, driver two goes C -> D,
// and one of them carries the other. Only the two fixed orderings are compared:
//   driver one: A -> C -> D -> B
//   driver two: C -> A -> B -> D
use std::fmt;

use ordered_float::OrderedFloat;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn, Level};

use crate::error::DetourError;
use crate::geo::Coordinate;

const DECIMAL_PLACES: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    A,
    B,
    C,
    D,
}

impl Stop {
    pub const ALL: [Stop; 4] = [Stop::A, Stop::B, Stop::C, Stop::D];
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stop::A => "A",
            Stop::B => "B",
            Stop::C => "C",
            Stop::D => "D",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ride {
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
}

impl Ride {
    pub fn new(pickup: Coordinate, dropoff: Coordinate) -> Self {
        Self { pickup, dropoff }
    }

    /// Length of the ride with no detour.
    pub fn direct_miles(&self) -> f64 {
        self.pickup.miles_to(&self.dropoff)
    }
}

/// Whose route the shortest detour follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    /// A -> C -> D -> B
    First,
    /// C -> A -> B -> D
    Second,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::First => write!(f, "driver one (A -> C -> D -> B)"),
            Driver::Second => write!(f, "driver two (C -> A -> B -> D)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detour {
    pub driver: Driver,
    /// Rounded half-up to two decimal places.
    pub miles: f64,
}

fn route_miles(stops: &[Coordinate]) -> f64 {
    stops.windows(2).map(|leg| leg[0].miles_to(&leg[1])).sum()
}

/// Checks A, B, C, D in order and reports the first bad latitude or longitude.
fn validate(points: [(Stop, &Coordinate); 4]) -> Result<(), DetourError> {
    for (stop, coordinate) in points {
        if let Some((axis, value)) = coordinate.out_of_range() {
            warn!(%stop, %axis, value, "coordinate out of range");
            return Err(DetourError::InvalidCoordinate { stop, axis, value });
        }
    }
    Ok(())
}

pub fn shortest_detour(first: &Ride, second: &Ride) -> Result<Detour, DetourError> {
    let (a, b) = (&first.pickup, &first.dropoff);
    let (c, d) = (&second.pickup, &second.dropoff);
    validate([(Stop::A, a), (Stop::B, b), (Stop::C, c), (Stop::D, d)])?;
    if tracing::enabled!(Level::DEBUG) {
        debug!(
            first = first.direct_miles(),
            second = second.direct_miles(),
            "direct ride lengths"
        );
    }

    let candidates = [
        (Driver::First, route_miles(&[*a, *c, *d, *b])),
        (Driver::Second, route_miles(&[*c, *a, *b, *d])),
    ];
    for (driver, miles) in &candidates {
        debug!(%driver, miles, "route total");
    }

    // min_by_key keeps the first of equal totals, so ties go to driver one.
    let (driver, miles) = candidates
        .into_iter()
        .min_by_key(|&(_, miles)| OrderedFloat(miles))
        .unwrap_or(candidates[0]);

    Ok(Detour {
        driver,
        miles: round_half_up(miles, DECIMAL_PLACES),
    })
}

/// Ride one is `a -> b`, ride two is `c -> d`.
pub fn calculate_detour(
    a: Coordinate,
    b: Coordinate,
    c: Coordinate,
    d: Coordinate,
) -> Result<Detour, DetourError> {
    shortest_detour(&Ride::new(a, b), &Ride::new(c, d))
}

/// Rounds the exact binary value of `value`, so 0.015 (stored just below
/// the midpoint) goes down to 0.01. NaN and infinities pass through.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
        }
        None => value,
    }
}
