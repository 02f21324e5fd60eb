use std::sync::LazyLock;

use sun_times::geo::*;
use sun_times::types::{Coordinate, NamedLocation, NearbyQuery};
use sun_times::{Error, LocationDataset};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

static DATASET: LazyLock<LocationDataset> =
    LazyLock::new(|| LocationDataset::bundled().expect("bundled dataset parses"));

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

fn new_york() -> NamedLocation {
    NamedLocation::new("New York", Some("NY"), Some("United States"), 40.7128, -74.0060)
}

fn london() -> NamedLocation {
    NamedLocation::new("London", Some("England"), Some("United Kingdom"), 51.5074, -0.1278)
}

fn slugs(results: &[sun_times::NearbyLocation<'_>]) -> Vec<String> {
    results.iter().map(|n| n.location.slug.clone()).collect()
}

// ── Coordinate ──

#[test]
fn test_coordinate_rejects_out_of_range_and_nan() {
    let err = Coordinate::new(250.0, -999.0).unwrap_err();
    assert!(matches!(err, Error::InvalidLatitude { value } if value == 250.0));
    let err = Coordinate::new(0.0, -999.0).unwrap_err();
    assert!(matches!(err, Error::InvalidLongitude { value } if value == -999.0));
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::NAN).is_err());
    assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_coordinate_getters() {
    let c = coord(-33.8688, 151.2093);
    assert_eq!(c.latitude(), -33.8688);
    assert_eq!(c.longitude(), 151.2093);
    assert_eq!(c, coord(-33.8688, 151.2093));
}

// ── Haversine ──

#[test]
fn test_haversine_zero_distance() {
    let p = coord(40.7128, -74.0060);
    assert_approx!(haversine_km(p, p), 0.0, 1e-9);
}

#[test]
fn test_haversine_one_degree_on_equator() {
    assert_approx!(haversine_km(coord(0.0, 0.0), coord(0.0, 1.0)), 111.195, 0.01);
}

#[test]
fn test_haversine_antipodes_half_circumference() {
    let half = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert_approx!(haversine_km(coord(0.0, 0.0), coord(0.0, 180.0)), half, 1e-6);
    assert_approx!(haversine_km(coord(90.0, 0.0), coord(-90.0, 0.0)), half, 1e-6);
}

#[test]
fn test_haversine_new_york_london() {
    let d = haversine_km(coord(40.7128, -74.0060), coord(51.5074, -0.1278));
    assert_approx!(d, 5570.2, 1.0);
}

#[test]
fn test_haversine_symmetric_across_antimeridian() {
    let a = coord(-17.0, 179.5);
    let b = coord(-17.0, -179.5);
    assert_approx!(haversine_km(a, b), haversine_km(b, a), 1e-9);
    assert!(haversine_km(a, b) < 120.0);
}

// ── find_nearest ──

#[test]
fn test_find_nearest_empty_pool() {
    assert!(find_nearest(coord(40.0, -74.0), &[]).is_none());
}

#[test]
fn test_find_nearest_identical_point() {
    let pool = vec![london(), new_york()];
    let hit = find_nearest(coord(40.7128, -74.0060), &pool).unwrap();
    assert_eq!(hit.location.slug, "new-york-ny");
    assert_approx!(hit.distance_km, 0.0, 1e-9);
}

#[test]
fn test_find_nearest_new_york_not_london() {
    let pool = vec![london(), new_york()];
    let hit = find_nearest(coord(40.0, -74.0), &pool).unwrap();
    assert_eq!(hit.location.name, "New York");
    assert!(hit.distance_km < 200.0, "distance={}", hit.distance_km);
}

#[test]
fn test_find_nearest_tie_keeps_first_entry() {
    let east = NamedLocation::new("East", None, None, 0.0, 1.0);
    let west = NamedLocation::new("West", None, None, 0.0, -1.0);
    let pool = vec![west.clone(), east.clone()];
    assert_eq!(find_nearest(coord(0.0, 0.0), &pool).unwrap().location.slug, "west");
    let pool = vec![east, west];
    assert_eq!(find_nearest(coord(0.0, 0.0), &pool).unwrap().location.slug, "east");
}

#[test]
fn test_find_nearest_skips_invalid_coordinates() {
    let broken = NamedLocation::new("Broken", None, None, f64::NAN, -74.0);
    let off_map = NamedLocation::new("Off Map", None, None, 40.0, -274.0);
    let pool = vec![broken, off_map, london()];
    let hit = find_nearest(coord(40.0, -74.0), &pool).unwrap();
    assert_eq!(hit.location.slug, "london-england");
    assert!(hit.distance_km.is_finite());
}

#[test]
fn test_find_nearest_all_invalid_is_none() {
    let pool = vec![NamedLocation::new("Broken", None, None, f64::NAN, f64::NAN)];
    assert!(find_nearest(coord(0.0, 0.0), &pool).is_none());
}

#[test]
fn test_find_nearest_bundled() {
    let hit = DATASET.nearest(coord(51.5, -0.12)).unwrap();
    assert_eq!(hit.location.slug, "london");
    let hit = DATASET.nearest(coord(89.0, 0.0)).unwrap();
    assert_eq!(hit.location.slug, "longyearbyen");
}

// ── find_nearby ──

#[test]
fn test_find_nearby_sorted_within_radius() {
    let results = DATASET.nearby(coord(40.7128, -74.0060), &NearbyQuery::default());
    assert_eq!(
        slugs(&results),
        [
            "new-york-ny",
            "jersey-city-nj",
            "newark-nj",
            "yonkers-ny",
            "stamford-ct",
            "philadelphia-pa",
            "boston-ma",
        ]
    );
    for pair in results.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
    assert!(results.iter().all(|n| n.distance_km <= 500.0));
}

#[test]
fn test_find_nearby_limit_and_radius() {
    let query = NearbyQuery {
        limit: 3,
        max_distance_km: 20.0,
        exclude_slug: None,
    };
    let results = DATASET.nearby(coord(40.7128, -74.0060), &query);
    assert_eq!(slugs(&results), ["new-york-ny", "jersey-city-nj", "newark-nj"]);

    let query = NearbyQuery {
        limit: 10,
        max_distance_km: 10.0,
        exclude_slug: None,
    };
    assert_eq!(DATASET.nearby(coord(40.7128, -74.0060), &query).len(), 2);
}

#[test]
fn test_find_nearby_exclude_slug() {
    let query = NearbyQuery {
        limit: 2,
        exclude_slug: Some("new-york-ny".to_string()),
        ..NearbyQuery::default()
    };
    let results = find_nearby(coord(40.7128, -74.0060), DATASET.locations(), &query);
    assert_eq!(slugs(&results), ["jersey-city-nj", "newark-nj"]);
}

#[test]
fn test_find_nearby_nothing_in_range() {
    let results = DATASET.nearby(coord(0.0, 0.0), &NearbyQuery::default());
    assert!(results.is_empty());
    assert!(find_nearby(coord(0.0, 0.0), &[], &NearbyQuery::default()).is_empty());
}

#[test]
fn test_nearby_to_never_includes_self() {
    let query = NearbyQuery {
        limit: 4,
        ..NearbyQuery::default()
    };
    let results = DATASET.nearby_to("new-york-ny", &query);
    assert_eq!(
        slugs(&results),
        ["jersey-city-nj", "newark-nj", "yonkers-ny", "stamford-ct"]
    );
    assert!(DATASET.nearby_to("london", &NearbyQuery::default()).len() == 1);
    assert!(DATASET.nearby_to("no-such-place", &NearbyQuery::default()).is_empty());
}
