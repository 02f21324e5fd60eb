use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::trace;

use crate::ephemeris::{Spa, SunEphemeris};
use crate::error::Result;
use crate::golden_hour::{golden_hour_windows, Daylight};
use crate::types::{Coordinate, EngineConfig, SolarEventSet};

#[derive(Debug, Clone)]
pub struct SolarEngine<E = Spa> {
    ephemeris: E,
    config: EngineConfig,
}

impl Default for SolarEngine<Spa> {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl SolarEngine<Spa> {
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            ephemeris: Spa::new(config.observer_height_m),
            config,
        }
    }
}

impl<E: SunEphemeris> SolarEngine<E> {
    pub fn new(ephemeris: E, config: EngineConfig) -> Self {
        Self { ephemeris, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute(&self, coordinate: Coordinate, date: NaiveDate) -> SolarEventSet {
        let raw = self.ephemeris.sun_times(coordinate, date);
        let daylight = Daylight::new(raw.sunrise, raw.sunset);
        let (morning_golden_hour, evening_golden_hour) = golden_hour_windows(
            daylight.as_ref(),
            raw.golden_hour_end,
            raw.golden_hour,
            Duration::minutes(self.config.golden_hour_minutes),
        );

        trace!(
            lat = coordinate.latitude(),
            lng = coordinate.longitude(),
            %date,
            kind = ?raw.kind,
            "computed solar events"
        );

        SolarEventSet {
            coordinate,
            date,
            kind: raw.kind,
            sunrise: raw.sunrise,
            sunset: raw.sunset,
            solar_noon: raw.solar_noon,
            nadir: raw.nadir,
            civil_dawn: raw.civil_dawn,
            civil_dusk: raw.civil_dusk,
            nautical_dawn: raw.nautical_dawn,
            nautical_dusk: raw.nautical_dusk,
            astronomical_dawn: raw.astronomical_dawn,
            astronomical_dusk: raw.astronomical_dusk,
            morning_golden_hour,
            evening_golden_hour,
            daylight_duration_minutes: daylight.map(|d| d.duration_minutes()),
        }
    }

    pub fn compute_at(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<SolarEventSet> {
        Ok(self.compute(Coordinate::new(latitude, longitude)?, date))
    }
}

/// Solar events for `date` at (`latitude`, `longitude`) with default settings.
pub fn compute_solar_events(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
) -> Result<SolarEventSet> {
    SolarEngine::<Spa>::default().compute_at(latitude, longitude, date)
}

pub fn daylight_duration_minutes(
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
) -> Option<i64> {
    Daylight::new(sunrise, sunset).map(|d| d.duration_minutes())
}
