//! Great-circle distances and nearest-location search.
//!
//! Searches are linear scans over the pool. Records without a usable
//! coordinate are skipped, never fatal.

use tracing::debug;

use crate::angles::deg_to_rad;
use crate::types::{Coordinate, NamedLocation, NearbyLocation, NearbyQuery};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = deg_to_rad(to.latitude() - from.latitude());
    let d_lng = deg_to_rad(to.longitude() - from.longitude());
    let a = (d_lat / 2.0).sin().powi(2)
        + deg_to_rad(from.latitude()).cos()
            * deg_to_rad(to.latitude()).cos()
            * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

fn with_distances<'a>(
    origin: Coordinate,
    pool: &'a [NamedLocation],
) -> impl Iterator<Item = NearbyLocation<'a>> + 'a {
    pool.iter().filter_map(move |location| {
        let Some(position) = location.coordinate() else {
            debug!(
                slug = %location.slug,
                lat = location.lat,
                lng = location.lng,
                "skipping location without valid coordinates"
            );
            return None;
        };
        Some(NearbyLocation {
            location,
            distance_km: haversine_km(origin, position),
        })
    })
}

/// Closest location to `origin`; on ties the earliest pool entry wins.
pub fn find_nearest(origin: Coordinate, pool: &[NamedLocation]) -> Option<NearbyLocation<'_>> {
    let mut best: Option<NearbyLocation<'_>> = None;
    for candidate in with_distances(origin, pool) {
        match best {
            Some(b) if b.distance_km <= candidate.distance_km => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Locations within `query.max_distance_km`, closest first, at most `query.limit`.
pub fn find_nearby<'a>(
    origin: Coordinate,
    pool: &'a [NamedLocation],
    query: &NearbyQuery,
) -> Vec<NearbyLocation<'a>> {
    let excluded = query.exclude_slug.as_deref();
    let mut results: Vec<NearbyLocation<'a>> = with_distances(origin, pool)
        .filter(|n| Some(n.location.slug.as_str()) != excluded)
        .filter(|n| n.distance_km <= query.max_distance_km)
        .collect();
    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    results.truncate(query.limit);
    results
}
