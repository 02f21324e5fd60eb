pub mod angles;
pub mod dataset;
pub mod display;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod geo;
pub mod golden_hour;
pub mod month;
pub mod stats;
pub mod timezone;
pub mod types;

pub use angles::{deg_to_rad, observer_dip, solar_position};

pub use dataset::{slugify, LocationDataset};

pub use display::{
    event_rows, format_clock, format_day_length, format_day_length_change, format_window,
    polar_notice, EventRow, PLACEHOLDER,
};

pub use engine::{compute_solar_events, daylight_duration_minutes, SolarEngine};

pub use ephemeris::{Spa, SunEphemeris};

pub use error::{Error, Result};

pub use geo::{find_nearby, find_nearest, haversine_km, EARTH_RADIUS_KM};

pub use month::{month_from_slug, month_slug, month_table, next_month, previous_month};

pub use stats::{daylight_stats, mean_latitude};

pub use timezone::{timezone_for, timezone_for_region};

pub use types::{
    Coordinate, DayKind, DaylightStats, EngineConfig, GoldenHourSource, GoldenHourWindow,
    MonthTable, NamedLocation, NearbyLocation, NearbyQuery, RawSunTimes, SolarEventSet,
    SolarPosition,
};
