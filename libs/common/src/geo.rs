//! Geo utilities: great-circle distance and the fixed city geocode table
//!
//! Discovery and search filter hosts by distance from the viewer. The
//! city table is the complete set of locations mock data is generated
//! from; geocoding an unknown city yields `None` and callers surface an
//! empty result list.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Cities known to the mock geocoder
const CITY_TABLE: &[(&str, f64, f64)] = &[
    ("new york", 40.7128, -74.0060),
    ("los angeles", 34.0522, -118.2437),
    ("chicago", 41.8781, -87.6298),
    ("houston", 29.7604, -95.3698),
    ("miami", 25.7617, -80.1918),
    ("seattle", 47.6062, -122.3321),
    ("san francisco", 37.7749, -122.4194),
    ("boston", 42.3601, -71.0589),
    ("denver", 39.7392, -104.9903),
    ("austin", 30.2672, -97.7431),
];

/// Haversine distance between two coordinate pairs, in kilometers
/// rounded to one decimal place
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    let km = EARTH_RADIUS_KM * c;
    (km * 10.0).round() / 10.0
}

/// Look up a city name in the fixed geocode table
///
/// Lookup is case-insensitive and ignores surrounding whitespace.
/// Returns `None` for cities outside the table.
pub fn geocode(city: &str) -> Option<Coordinates> {
    let needle = city.trim().to_lowercase();
    CITY_TABLE
        .iter()
        .find(|(name, _, _)| *name == needle)
        .map(|&(_, lat, lon)| Coordinates::new(lat, lon))
}

/// All city names known to the geocoder, in table order
pub fn known_cities() -> Vec<&'static str> {
    CITY_TABLE.iter().map(|(name, _, _)| *name).collect()
}
