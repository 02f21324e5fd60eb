use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::engine::SolarEngine;
use crate::ephemeris::SunEphemeris;
use crate::error::{Error, Result};
use crate::types::{Coordinate, MonthTable, SolarEventSet};

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub const MONTH_SLUGS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub fn month_slug(month: Month) -> &'static str {
    MONTH_SLUGS[month.number_from_month() as usize - 1]
}

pub fn month_from_slug(slug: &str) -> Option<Month> {
    MONTH_SLUGS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(slug.trim()))
        .map(|idx| MONTHS[idx])
}

pub fn previous_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        m => (year, m.pred()),
    }
}

pub fn next_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::December => (year + 1, Month::January),
        m => (year, m.succ()),
    }
}

pub fn month_days(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidMonth { year, month })?;
    Ok(first.iter_days().take_while(|d| d.month() == month).collect())
}

pub fn month_table<E: SunEphemeris>(
    engine: &SolarEngine<E>,
    coordinate: Coordinate,
    year: i32,
    month: u32,
    timezone: Tz,
) -> Result<MonthTable> {
    let days = month_days(year, month)?
        .into_iter()
        .map(|date| engine.compute(coordinate, date))
        .collect();
    Ok(MonthTable {
        coordinate,
        year,
        month: MONTHS[month as usize - 1],
        timezone,
        days,
    })
}

fn local_time(instant: DateTime<Utc>, tz: Tz) -> NaiveTime {
    instant.with_timezone(&tz).time()
}

impl MonthTable {
    // First day wins ties.
    fn extreme_by<F>(&self, event: F, later: bool) -> Option<&SolarEventSet>
    where
        F: Fn(&SolarEventSet) -> Option<DateTime<Utc>>,
    {
        let mut best: Option<(&SolarEventSet, NaiveTime)> = None;
        for day in &self.days {
            let Some(instant) = event(day) else { continue };
            let t = local_time(instant, self.timezone);
            let replace = match best {
                None => true,
                Some((_, b)) if later => t > b,
                Some((_, b)) => t < b,
            };
            if replace {
                best = Some((day, t));
            }
        }
        best.map(|(day, _)| day)
    }

    pub fn earliest_sunrise(&self) -> Option<&SolarEventSet> {
        self.extreme_by(|d| d.sunrise, false)
    }

    pub fn latest_sunrise(&self) -> Option<&SolarEventSet> {
        self.extreme_by(|d| d.sunrise, true)
    }

    pub fn earliest_sunset(&self) -> Option<&SolarEventSet> {
        self.extreme_by(|d| d.sunset, false)
    }

    pub fn latest_sunset(&self) -> Option<&SolarEventSet> {
        self.extreme_by(|d| d.sunset, true)
    }

    /// Day length on the last day minus the first, in minutes.
    pub fn day_length_change(&self) -> Option<i64> {
        let first = self.days.first()?.daylight_duration_minutes?;
        let last = self.days.last()?.daylight_duration_minutes?;
        Some(last - first)
    }

    /// Day lengths in minutes for charting; days without sunrise/sunset are skipped.
    pub fn day_lengths(&self) -> Vec<i64> {
        self.days
            .iter()
            .filter_map(|d| d.daylight_duration_minutes)
            .collect()
    }
}
