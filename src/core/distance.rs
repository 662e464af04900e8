use serde::{Deserialize, Serialize};
use std::fmt;

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

const KM_PER_MILE: f64 = 1.609344;
const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Output unit for [`distance`].
///
/// Parsed case-insensitively from the upstream unit code. Missing or
/// unrecognized codes fall back to kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "mi" | "m" | "mile" | "miles" => DistanceUnit::Miles,
            "nm" | "n" | "nmi" | "nautical" => DistanceUnit::NauticalMiles,
            _ => DistanceUnit::Kilometers,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nm",
        }
    }

    /// Convert a kilometer value into this unit
    #[inline]
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km / KM_PER_MILE,
            DistanceUnit::NauticalMiles => km / KM_PER_NAUTICAL_MILE,
        }
    }
}

impl From<String> for DistanceUnit {
    fn from(code: String) -> Self {
        DistanceUnit::from_code(&code)
    }
}

impl From<DistanceUnit> for String {
    fn from(unit: DistanceUnit) -> Self {
        unit.code().to_string()
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two points in the requested unit
#[inline]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    unit.from_km(haversine_distance(lat1, lon1, lat2, lon2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: (f64, f64) = (51.5074, -0.1278);
    const PARIS: (f64, f64) = (48.8566, 2.3522);

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let distance = haversine_distance(LONDON.0, LONDON.1, PARIS.0, PARIS.1);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_distance_units() {
        let km = distance(LONDON.0, LONDON.1, PARIS.0, PARIS.1, DistanceUnit::Kilometers);
        let mi = distance(LONDON.0, LONDON.1, PARIS.0, PARIS.1, DistanceUnit::Miles);
        let nm = distance(LONDON.0, LONDON.1, PARIS.0, PARIS.1, DistanceUnit::NauticalMiles);

        assert!((mi - 214.0).abs() < 7.0, "Distance should be ~214mi, got {}", mi);
        assert!((nm - 186.0).abs() < 6.0, "Distance should be ~186nm, got {}", nm);
        assert!(mi < km && nm < mi);
    }

    #[test]
    fn test_identical_points() {
        for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles, DistanceUnit::NauticalMiles] {
            assert_eq!(distance(50.141097, 14.592614, 50.141097, 14.592614, unit), 0.0);
        }
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        // `a` rounds to just above 1 for this pair
        let d = haversine_distance(-74.6, -178.7, 74.6, 1.3);
        assert!(d.is_finite(), "Distance should be finite, got {}", d);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);

        let d = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);
    }

    #[test]
    fn test_symmetry() {
        let there = distance(50.141097, 14.592614, 49.739001, 14.453499, DistanceUnit::Miles);
        let back = distance(49.739001, 14.453499, 50.141097, 14.592614, DistanceUnit::Miles);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_unit_codes() {
        assert_eq!(DistanceUnit::from_code("km"), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_code("K"), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_code(""), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_code("furlongs"), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_code("Miles"), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::from_code("M"), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::from_code("NM"), DistanceUnit::NauticalMiles);
        assert_eq!(DistanceUnit::from_code(" n "), DistanceUnit::NauticalMiles);
    }

    #[test]
    fn test_unit_serde() {
        let unit: DistanceUnit = serde_json::from_str(r#""mi""#).unwrap();
        assert_eq!(unit, DistanceUnit::Miles);
        assert_eq!(serde_json::to_string(&DistanceUnit::NauticalMiles).unwrap(), r#""nm""#);
    }
}
