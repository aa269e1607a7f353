use std::fmt;

const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// True when `value` lies inside [-limit, limit]. NaN is never in range.
    pub fn contains(self, value: f64) -> bool {
        (-self.limit()..=self.limit()).contains(&value)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A latitude/longitude pair in degrees. Construction does not check ranges;
/// call `out_of_range` before using it in a calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// First axis (latitude checked before longitude) whose value is outside its range.
    pub fn out_of_range(&self) -> Option<(Axis, f64)> {
        if !Axis::Latitude.contains(self.latitude) {
            return Some((Axis::Latitude, self.latitude));
        }
        if !Axis::Longitude.contains(self.longitude) {
            return Some((Axis::Longitude, self.longitude));
        }
        None
    }

    pub fn miles_to(&self, other: &Coordinate) -> f64 {
        great_circle_miles(self, other)
    }
}

/// Great-circle distance using the spherical law of cosines.
/// Input lat/lon in degrees. Output in statute miles.
pub fn great_circle_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lat2) = (from.latitude.to_radians(), to.latitude.to_radians());
    let dlon = (from.longitude - to.longitude).to_radians();
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    // Identical points can land a hair above 1.0.
    let central_angle = cos_angle.clamp(-1.0, 1.0).acos();
    central_angle.to_degrees() * NAUTICAL_MILES_PER_DEGREE * STATUTE_MILES_PER_NAUTICAL_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn same_point_is_zero() {
        let points = [
            Coordinate::new(40.7128, -74.0060),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(89.999, 179.999),
        ];
        for p in points {
            let d = great_circle_miles(&p, &p);
            assert!(!d.is_nan());
            assert!(d < 1e-3, "distance from {:?} to itself was {}", p, d);
        }
    }

    #[test]
    fn one_degree_along_equator() {
        let d = great_circle_miles(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0));
        assert!(close(d, 60.0 * 1.1515));
    }

    #[test]
    fn equator_to_pole_and_antipode() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!(close(great_circle_miles(&origin, &Coordinate::new(90.0, 0.0)), 90.0 * 60.0 * 1.1515));
        assert!(close(great_circle_miles(&origin, &Coordinate::new(0.0, 180.0)), 180.0 * 60.0 * 1.1515));
    }

    #[test]
    fn distance_is_symmetric() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        assert_eq!(nyc.miles_to(&la), la.miles_to(&nyc));
        assert!(close(nyc.miles_to(&la), 2445.4416845850947));
    }

    #[test]
    fn range_checks() {
        assert_eq!(Coordinate::new(90.0, -180.0).out_of_range(), None);
        assert_eq!(
            Coordinate::new(91.0, 0.0).out_of_range(),
            Some((Axis::Latitude, 91.0))
        );
        assert_eq!(
            Coordinate::new(0.0, -181.0).out_of_range(),
            Some((Axis::Longitude, -181.0))
        );
        // Latitude is reported first.
        assert_eq!(
            Coordinate::new(-95.0, 200.0).out_of_range(),
            Some((Axis::Latitude, -95.0))
        );
        assert!(Coordinate::new(f64::NAN, 0.0).out_of_range().is_some());
    }
}
