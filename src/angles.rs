use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use solar_positioning::{spa, time::DeltaT, RefractionCorrection};

use crate::error::Result;
use crate::types::{Coordinate, SolarPosition};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Horizon dip in degrees for an observer `height_m` above the surface.
pub fn observer_dip(height_m: f64) -> f64 {
    -2.076 * height_m.max(0.0).sqrt() / 60.0
}

/// Sun position at `instant` from the NREL SPA, refracted for a standard atmosphere.
pub fn solar_position(coordinate: Coordinate, instant: &DateTime<Utc>) -> Result<SolarPosition> {
    let delta_t = DeltaT::estimate_from_date_like(*instant)?;
    let position = spa::solar_position(
        *instant,
        coordinate.latitude(),
        coordinate.longitude(),
        0.0,
        delta_t,
        Some(RefractionCorrection::standard()),
    )?;
    Ok(SolarPosition {
        altitude: position.elevation_angle(),
        azimuth: position.azimuth(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dip_grows_with_height() {
        assert_eq!(observer_dip(0.0), 0.0);
        assert!(observer_dip(400.0) < observer_dip(100.0));
        assert!((observer_dip(100.0) + 0.346).abs() < 1e-3);
    }
}
