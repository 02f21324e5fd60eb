//! Golden-hour windows derived from sunrise, sunset and the ephemeris markers.
//!
//! Each window goes through the same steps: build the default window anchored
//! on sunrise or sunset, try to replace it with one anchored on the +6°
//! marker, validate, and fall back to the default if validation fails.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::types::{GoldenHourSource, GoldenHourWindow};

/// The daylight interval of one date; only exists when sunrise precedes sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daylight {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl Daylight {
    pub fn new(sunrise: Option<DateTime<Utc>>, sunset: Option<DateTime<Utc>>) -> Option<Self> {
        match (sunrise, sunset) {
            (Some(sunrise), Some(sunset)) if sunrise < sunset => Some(Self { sunrise, sunset }),
            _ => None,
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise <= instant && instant <= self.sunset
    }

    fn strictly_contains(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise < instant && instant < self.sunset
    }

    pub fn duration_minutes(&self) -> i64 {
        ((self.sunset - self.sunrise).num_milliseconds() as f64 / 60_000.0).round() as i64
    }
}

pub fn default_morning(day: &Daylight, length: Duration) -> GoldenHourWindow {
    GoldenHourWindow {
        start: day.sunrise,
        end: (day.sunrise + length).min(day.sunset),
        source: GoldenHourSource::Fallback,
    }
}

pub fn default_evening(day: &Daylight, length: Duration) -> GoldenHourWindow {
    GoldenHourWindow {
        start: (day.sunset - length).max(day.sunrise),
        end: day.sunset,
        source: GoldenHourSource::Fallback,
    }
}

/// Morning window ending on the ephemeris' morning marker.
pub fn refine_morning(
    day: &Daylight,
    marker: Option<DateTime<Utc>>,
    length: Duration,
) -> Option<GoldenHourWindow> {
    let end = marker.filter(|&m| day.strictly_contains(m))?;
    Some(GoldenHourWindow {
        start: (end - length).max(day.sunrise),
        end,
        source: GoldenHourSource::Refined,
    })
}

/// Evening window starting on the ephemeris' evening marker.
pub fn refine_evening(
    day: &Daylight,
    marker: Option<DateTime<Utc>>,
    length: Duration,
) -> Option<GoldenHourWindow> {
    let start = marker.filter(|&m| day.strictly_contains(m))?;
    Some(GoldenHourWindow {
        start,
        end: (start + length).min(day.sunset),
        source: GoldenHourSource::Refined,
    })
}

pub fn is_valid(window: &GoldenHourWindow, day: &Daylight) -> bool {
    window.start < window.end && day.contains(window.start) && day.contains(window.end)
}

fn settle(
    marker: Option<DateTime<Utc>>,
    refined: Option<GoldenHourWindow>,
    fallback: GoldenHourWindow,
    day: &Daylight,
    label: &str,
) -> Option<GoldenHourWindow> {
    match refined {
        Some(window) if is_valid(&window, day) => Some(window),
        _ => {
            if let Some(marker) = marker {
                debug!(
                    %marker,
                    sunrise = %day.sunrise,
                    sunset = %day.sunset,
                    "{label} golden hour marker rejected, using sunrise/sunset anchored window"
                );
            }
            is_valid(&fallback, day).then_some(fallback)
        }
    }
}

/// Morning and evening windows, or `None` for both when there is no daylight interval.
pub fn golden_hour_windows(
    daylight: Option<&Daylight>,
    morning_marker: Option<DateTime<Utc>>,
    evening_marker: Option<DateTime<Utc>>,
    length: Duration,
) -> (Option<GoldenHourWindow>, Option<GoldenHourWindow>) {
    let Some(day) = daylight else {
        return (None, None);
    };
    let morning = settle(
        morning_marker,
        refine_morning(day, morning_marker, length),
        default_morning(day, length),
        day,
        "morning",
    );
    let evening = settle(
        evening_marker,
        refine_evening(day, evening_marker, length),
        default_evening(day, length),
        day,
        "evening",
    );
    (morning, evening)
}
