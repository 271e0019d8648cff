//! Integration tests for the geo utilities
//!
//! These tests exercise the public geocode + distance surface the way
//! the discovery and search screens consume it: resolve two cities,
//! measure the distance between them, and filter by a radius.

use common::geo::{Coordinates, distance_km, geocode, known_cities};

/// Test that verifies geocoding and distance measurement compose the
/// way a distance filter uses them
#[test]
fn test_geocode_distance_integration() {
    let new_york = geocode("New York").expect("New York should geocode");
    let boston = geocode("Boston").expect("Boston should geocode");

    let km = distance_km(new_york, boston);
    // NYC to Boston is roughly 300 km as the crow flies
    assert!((250.0..=350.0).contains(&km), "unexpected distance {km}");

    // A 500 km radius around New York keeps Boston but drops LA
    let los_angeles = geocode("Los Angeles").unwrap();
    assert!(distance_km(new_york, boston) <= 500.0);
    assert!(distance_km(new_york, los_angeles) > 500.0);
}

/// Every city in the table must be reachable from every other with a
/// finite, symmetric, nonnegative distance
#[test]
fn test_city_table_pairwise_distances() {
    let cities: Vec<Coordinates> = known_cities()
        .into_iter()
        .map(|name| geocode(name).unwrap())
        .collect();

    for (i, &a) in cities.iter().enumerate() {
        for &b in &cities[i..] {
            let forward = distance_km(a, b);
            let backward = distance_km(b, a);
            assert!(forward.is_finite());
            assert!(forward >= 0.0);
            assert_eq!(forward, backward);
        }
    }
}
