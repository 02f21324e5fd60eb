use std::env;

use chrono::{Datelike, Utc};

use sun_times::{
    event_rows, format_clock, format_day_length_change, month_slug, month_table, polar_notice,
    solar_position, timezone_for, Coordinate, LocationDataset, NearbyQuery, SolarEngine,
};

fn main() -> sun_times::Result<()> {
    let dataset = LocationDataset::bundled()?;
    let engine: SolarEngine = SolarEngine::default();
    let today = Utc::now().date_naive();

    let args: Vec<String> = env::args().skip(1).collect();
    let location = match args.as_slice() {
        [lat, lng] => {
            let lat: f64 = lat.parse().unwrap_or(f64::NAN);
            let lng: f64 = lng.parse().unwrap_or(f64::NAN);
            let origin = Coordinate::new(lat, lng)?;
            match dataset.nearest(origin) {
                Some(hit) => {
                    println!(
                        "Nearest location: {} ({:.1} km away)",
                        hit.location.display_name(),
                        hit.distance_km
                    );
                    hit.location
                }
                None => {
                    println!("No locations available; search for a city by name instead.");
                    return Ok(());
                }
            }
        }
        [slug] => match dataset.get(slug) {
            Some(location) => location,
            None => {
                println!("Unknown location `{slug}`");
                return Ok(());
            }
        },
        _ => match dataset.get("new-york-ny") {
            Some(location) => location,
            None => return Ok(()),
        },
    };

    let Some(coordinate) = location.coordinate() else {
        println!("{} has no usable coordinates", location.display_name());
        return Ok(());
    };
    let tz = timezone_for(location);
    let events = engine.compute(coordinate, today);

    println!("=== Sun times for {} on {} ({}) ===", location.display_name(), today, tz);
    if let Some(notice) = polar_notice(events.kind) {
        println!("{notice}");
    }
    for row in event_rows(&events, tz) {
        println!("{:<20} {}", row.label, row.value);
    }
    println!("Dusk today: {}", format_clock(events.civil_dusk, tz));
    let sun = solar_position(coordinate, &Utc::now())?;
    println!("Sun now:    {:.1}° up, azimuth {:.0}°", sun.altitude, sun.azimuth);

    println!();
    println!("--- Nearby ---");
    for near in dataset.nearby_to(&location.slug, &NearbyQuery::default()) {
        println!("{:<28} {:>7.1} km", near.location.display_name(), near.distance_km);
    }

    let table = month_table(&engine, coordinate, today.year(), today.month(), tz)?;
    println!();
    println!("--- {} ---", month_slug(table.month));
    if let Some(day) = table.earliest_sunrise() {
        println!("Earliest sunrise: {} at {}", day.date, format_clock(day.sunrise, tz));
    }
    if let Some(day) = table.latest_sunset() {
        println!("Latest sunset:    {} at {}", day.date, format_clock(day.sunset, tz));
    }
    if let Some(delta) = table.day_length_change() {
        println!("Day length change: {}", format_day_length_change(delta));
    }
    Ok(())
}
