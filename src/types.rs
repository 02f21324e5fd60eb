use chrono::{DateTime, Duration, Month, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point on the globe, in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validated constructor; NaN and out-of-range values are rejected.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Refracted elevation above the horizon, degrees.
    pub altitude: f64,
    /// Degrees clockwise from north.
    pub azimuth: f64,
}

/// Crossing times as reported by a [`SunEphemeris`](crate::ephemeris::SunEphemeris).
///
/// `golden_hour_end` is the morning +6° crossing and `golden_hour` the evening
/// one; neither is a window on its own. `kind` is whether the sun crosses
/// the sunrise horizon at all that day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawSunTimes {
    pub kind: DayKind,
    pub solar_noon: Option<DateTime<Utc>>,
    pub nadir: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub civil_dawn: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    pub astronomical_dawn: Option<DateTime<Utc>>,
    pub astronomical_dusk: Option<DateTime<Utc>>,
    pub golden_hour_end: Option<DateTime<Utc>>,
    pub golden_hour: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldenHourSource {
    Refined,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoldenHourWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: GoldenHourSource,
}

impl GoldenHourWindow {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    #[default]
    Normal,
    PolarDay,
    PolarNight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarEventSet {
    pub coordinate: Coordinate,
    pub date: NaiveDate,
    pub kind: DayKind,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub solar_noon: Option<DateTime<Utc>>,
    pub nadir: Option<DateTime<Utc>>,
    pub civil_dawn: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    pub astronomical_dawn: Option<DateTime<Utc>>,
    pub astronomical_dusk: Option<DateTime<Utc>>,
    pub morning_golden_hour: Option<GoldenHourWindow>,
    pub evening_golden_hour: Option<GoldenHourWindow>,
    pub daylight_duration_minutes: Option<i64>,
}

impl SolarEventSet {
    pub fn morning_golden_hour_start(&self) -> Option<DateTime<Utc>> {
        self.morning_golden_hour.map(|w| w.start)
    }

    pub fn morning_golden_hour_end(&self) -> Option<DateTime<Utc>> {
        self.morning_golden_hour.map(|w| w.end)
    }

    pub fn evening_golden_hour_start(&self) -> Option<DateTime<Utc>> {
        self.evening_golden_hour.map(|w| w.start)
    }

    pub fn evening_golden_hour_end(&self) -> Option<DateTime<Utc>> {
        self.evening_golden_hour.map(|w| w.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub golden_hour_minutes: i64,
    pub observer_height_m: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            golden_hour_minutes: 60,
            observer_height_m: 0.0,
        }
    }
}

/// A record of the static location dataset.
///
/// Coordinates are kept raw; a record whose latitude or longitude is not a
/// finite in-range number has no [`coordinate`](Self::coordinate) and is
/// skipped by every distance query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedLocation {
    #[serde(alias = "city")]
    pub name: String,
    #[serde(default, alias = "admin1", alias = "state")]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(
        default = "crate::dataset::missing_degrees",
        deserialize_with = "crate::dataset::lenient_degrees"
    )]
    pub lat: f64,
    #[serde(
        default = "crate::dataset::missing_degrees",
        deserialize_with = "crate::dataset::lenient_degrees",
        alias = "lon"
    )]
    pub lng: f64,
    pub slug: String,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl NamedLocation {
    pub fn new(
        name: &str,
        region: Option<&str>,
        country: Option<&str>,
        lat: f64,
        lng: f64,
    ) -> Self {
        let slug = match region {
            Some(region) => crate::dataset::slugify(&format!("{name} {region}")),
            None => crate::dataset::slugify(name),
        };
        Self {
            name: name.to_string(),
            region: region.map(str::to_string),
            country: country.map(str::to_string),
            lat,
            lng,
            slug,
            timezone: None,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.lat, self.lng).ok()
    }

    pub fn display_name(&self) -> String {
        match (&self.region, &self.country) {
            (Some(region), _) => format!("{}, {}", self.name, region),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            (None, None) => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyLocation<'a> {
    pub location: &'a NamedLocation,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub limit: usize,
    pub max_distance_km: f64,
    pub exclude_slug: Option<String>,
}

impl Default for NearbyQuery {
    fn default() -> Self {
        Self {
            limit: 8,
            max_distance_km: 500.0,
            exclude_slug: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTable {
    pub coordinate: Coordinate,
    pub year: i32,
    pub month: Month,
    pub timezone: Tz,
    pub days: Vec<SolarEventSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightStats {
    pub earliest_sunrise_month: Month,
    pub latest_sunset_month: Month,
    pub longest_day_month: Month,
    pub shortest_day_month: Month,
    pub daylight_range_hours: (u8, u8),
}
