use chrono::{TimeZone, Utc};

use sun_times::angles::*;
use sun_times::types::Coordinate;

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

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

// ── Conversions ──

#[test]
fn test_known_conversions() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-10);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-10);
    assert_approx!(deg_to_rad(-45.0), -std::f64::consts::FRAC_PI_4, 1e-10);
}

#[test]
fn test_observer_dip() {
    assert_eq!(observer_dip(0.0), 0.0);
    assert!(observer_dip(100.0) < 0.0);
    assert_eq!(observer_dip(-5.0), 0.0);
}

// ── Solar position ──

#[test]
fn test_equator_sun_overhead_at_equinox_noon() {
    let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 8, 0).unwrap();
    let pos = solar_position(coord(0.0, 0.0), &t).unwrap();
    assert!(pos.altitude > 89.0, "altitude={}", pos.altitude);
}

#[test]
fn test_polar_summer_midnight_sun() {
    let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 3, 0).unwrap();
    let midnight = Utc.with_ymd_and_hms(2024, 6, 21, 0, 3, 0).unwrap();
    let pos_noon = solar_position(coord(75.0, 0.0), &noon).unwrap();
    let pos_midnight = solar_position(coord(75.0, 0.0), &midnight).unwrap();
    assert_approx!(pos_noon.altitude, 38.44, 0.2);
    assert!(pos_midnight.altitude > 0.0);
    assert_approx!(pos_noon.azimuth, 180.0, 2.0);
}

#[test]
fn test_polar_winter_noon_below_horizon() {
    let t = Utc.with_ymd_and_hms(2024, 12, 21, 10, 43, 0).unwrap();
    let pos = solar_position(coord(69.6492, 18.9553), &t).unwrap();
    assert!(pos.altitude < 0.0, "altitude={}", pos.altitude);
}

#[test]
fn test_southern_hemisphere_reversed_seasons() {
    let jun = Utc.with_ymd_and_hms(2024, 6, 21, 2, 0, 0).unwrap();
    let dec = Utc.with_ymd_and_hms(2024, 12, 21, 2, 0, 0).unwrap();
    let sydney = coord(-33.87, 151.21);
    let winter = solar_position(sydney, &jun).unwrap();
    let summer = solar_position(sydney, &dec).unwrap();
    assert!(winter.altitude < summer.altitude);
}

#[test]
fn test_morning_east_afternoon_west() {
    let ny = coord(40.7128, -74.0060);
    let morning = solar_position(ny, &Utc.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap()).unwrap();
    let afternoon =
        solar_position(ny, &Utc.with_ymd_and_hms(2024, 6, 21, 21, 0, 0).unwrap()).unwrap();
    assert!(morning.azimuth < 180.0, "azimuth={}", morning.azimuth);
    assert!(afternoon.azimuth > 180.0, "azimuth={}", afternoon.azimuth);
    assert_approx!(morning.altitude, afternoon.altitude, 2.0);
}

#[test]
fn test_azimuth_always_normalized() {
    let cases: &[(f64, f64, u32, u32)] = &[
        (39.8, -89.6, 1, 8),
        (39.8, -89.6, 7, 20),
        (-45.0, 170.0, 3, 12),
        (60.0, 10.0, 6, 3),
        (0.0, 0.0, 9, 12),
    ];
    for &(lat, lng, month, hour) in cases {
        let t = Utc.with_ymd_and_hms(2024, month, 15, hour, 0, 0).unwrap();
        let pos = solar_position(coord(lat, lng), &t).unwrap();
        assert!(
            pos.azimuth >= 0.0 && pos.azimuth < 360.0,
            "azimuth={} for ({}, {}) {}",
            pos.azimuth, lat, lng, t
        );
    }
}
