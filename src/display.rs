//! Human-readable clock times for a [`SolarEventSet`] in a display zone.
//!
//! Every undefined value becomes [`PLACEHOLDER`] or a polar notice; nothing
//! here ever prints an epoch or a NaN.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::types::{DayKind, GoldenHourWindow, SolarEventSet};

pub const PLACEHOLDER: &str = "N/A";
pub const CLOCK_FORMAT: &str = "%-I:%M %p";

pub const POLAR_DAY_NOTICE: &str = "The sun does not set on this date at this location.";
pub const POLAR_NIGHT_NOTICE: &str = "The sun does not rise on this date at this location.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub label: &'static str,
    pub value: String,
}

pub fn format_clock(instant: Option<DateTime<Utc>>, tz: Tz) -> String {
    match instant {
        Some(t) => t.with_timezone(&tz).format(CLOCK_FORMAT).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_window(window: Option<&GoldenHourWindow>, tz: Tz) -> String {
    match window {
        Some(w) => format!(
            "{} - {}",
            format_clock(Some(w.start), tz),
            format_clock(Some(w.end), tz)
        ),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_day_length(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) if m >= 0 => format!("{}h {}m", m / 60, m % 60),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_day_length_change(delta_minutes: i64) -> String {
    let sign = match delta_minutes {
        d if d > 0 => "+",
        d if d < 0 => "-",
        _ => "",
    };
    let abs = delta_minutes.unsigned_abs();
    format!("{sign}{}h {}m", abs / 60, abs % 60)
}

pub fn polar_notice(kind: DayKind) -> Option<&'static str> {
    match kind {
        DayKind::Normal => None,
        DayKind::PolarDay => Some(POLAR_DAY_NOTICE),
        DayKind::PolarNight => Some(POLAR_NIGHT_NOTICE),
    }
}

/// Labelled rows in the order a sun-times table lists them.
pub fn event_rows(events: &SolarEventSet, tz: Tz) -> Vec<EventRow> {
    let row = |label, value| EventRow { label, value };
    let day_length = match polar_notice(events.kind) {
        Some(notice) => notice.to_string(),
        None => format_day_length(events.daylight_duration_minutes),
    };
    vec![
        row("Sunrise", format_clock(events.sunrise, tz)),
        row("Solar Noon", format_clock(events.solar_noon, tz)),
        row("Sunset", format_clock(events.sunset, tz)),
        row(
            "Morning Golden Hour",
            format_window(events.morning_golden_hour.as_ref(), tz),
        ),
        row(
            "Evening Golden Hour",
            format_window(events.evening_golden_hour.as_ref(), tz),
        ),
        row("Civil Dawn", format_clock(events.civil_dawn, tz)),
        row("Civil Dusk", format_clock(events.civil_dusk, tz)),
        row("Nautical Dawn", format_clock(events.nautical_dawn, tz)),
        row("Nautical Dusk", format_clock(events.nautical_dusk, tz)),
        row("Astronomical Dawn", format_clock(events.astronomical_dawn, tz)),
        row("Astronomical Dusk", format_clock(events.astronomical_dusk, tz)),
        row("Day Length", day_length),
    ]
}
