use chrono::Month;

use crate::types::{DaylightStats, NamedLocation};

/// Seasonal daylight summary for a group of locations around `mean_latitude`.
pub fn daylight_stats(mean_latitude: f64) -> DaylightStats {
    let abs_lat = mean_latitude.abs();
    let daylight_range_hours = if abs_lat > 50.0 {
        (8, 16)
    } else if abs_lat > 35.0 {
        (9, 15)
    } else {
        (10, 14)
    };
    let (summer, winter) = if mean_latitude >= 0.0 {
        (Month::June, Month::December)
    } else {
        (Month::December, Month::June)
    };
    DaylightStats {
        earliest_sunrise_month: summer,
        latest_sunset_month: summer,
        longest_day_month: summer,
        shortest_day_month: winter,
        daylight_range_hours,
    }
}

/// Mean latitude over the records with usable coordinates.
pub fn mean_latitude<'a, I>(locations: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a NamedLocation>,
{
    let (sum, count) = locations
        .into_iter()
        .filter_map(NamedLocation::coordinate)
        .fold((0.0, 0usize), |(sum, count), c| (sum + c.latitude(), count + 1));
    (count > 0).then(|| sum / count as f64)
}
