//! Raw horizon and twilight crossing times.
//!
//! [`SunEphemeris`] is the seam between the event engine and the astronomy:
//! it answers "when does the sun cross elevation X around this date's solar
//! noon" and nothing else. [`Spa`] answers it with the NREL Solar Position
//! Algorithm from `solar-positioning`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use solar_positioning::{spa, time::DeltaT, Horizon, SunriseResult};
use tracing::warn;

use crate::angles;
use crate::types::{Coordinate, DayKind, RawSunTimes};

pub const GOLDEN_HOUR_ELEVATION: f64 = 6.0;

pub trait SunEphemeris {
    /// Crossing times for the solar cycle whose transit falls on `date` (UTC).
    fn sun_times(&self, coordinate: Coordinate, date: NaiveDate) -> RawSunTimes;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spa {
    pub observer_height_m: f64,
}

type Crossing = SunriseResult<DateTime<Utc>>;

impl Spa {
    pub fn new(observer_height_m: f64) -> Self {
        Self { observer_height_m }
    }

    /// `horizon` lowered by the dip seen from the observer's height.
    fn horizon(&self, horizon: Horizon) -> Horizon {
        let dip = angles::observer_dip(self.observer_height_m);
        if dip == 0.0 {
            horizon
        } else {
            Horizon::Custom(horizon.elevation_angle() + dip)
        }
    }

    fn spa_day(
        &self,
        coordinate: Coordinate,
        day: NaiveDate,
        delta_t: f64,
        horizon: Horizon,
    ) -> Option<Crossing> {
        spa::sunrise_sunset_for_horizon(
            day.and_time(NaiveTime::MIN).and_utc(),
            coordinate.latitude(),
            coordinate.longitude(),
            delta_t,
            self.horizon(horizon),
        )
        .inspect_err(|err| warn!(%day, ?horizon, %err, "sunrise/sunset calculation failed"))
        .ok()
    }

    /// Rising and setting through `horizon` on either side of the transit of `date`.
    ///
    /// SPA numbers events by UTC day, so a rising that lands after the
    /// transit (or a setting before it) belongs to a neighbouring cycle and
    /// is taken from that day's result instead.
    fn crossing(
        &self,
        coordinate: Coordinate,
        date: NaiveDate,
        delta_t: f64,
        horizon: Horizon,
    ) -> Option<Crossing> {
        let today = self.spa_day(coordinate, date, delta_t, horizon)?;
        let SunriseResult::RegularDay {
            mut sunrise,
            transit,
            mut sunset,
        } = today
        else {
            return Some(today);
        };

        if sunrise > transit {
            sunrise = date
                .pred_opt()
                .and_then(|day| self.spa_day(coordinate, day, delta_t, horizon))
                .and_then(|r| r.sunrise().copied())
                .unwrap_or(sunrise - Duration::days(1));
        }
        if sunset < transit {
            sunset = date
                .succ_opt()
                .and_then(|day| self.spa_day(coordinate, day, delta_t, horizon))
                .and_then(|r| r.sunset().copied())
                .unwrap_or(sunset + Duration::days(1));
        }

        Some(SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        })
    }
}

fn rise_and_set(crossing: Option<&Crossing>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    match crossing {
        Some(c) => (c.sunrise().copied(), c.sunset().copied()),
        None => (None, None),
    }
}

impl SunEphemeris for Spa {
    fn sun_times(&self, coordinate: Coordinate, date: NaiveDate) -> RawSunTimes {
        let delta_t = match DeltaT::estimate_from_date(date.year(), date.month()) {
            Ok(delta_t) => delta_t,
            Err(err) => {
                warn!(%date, %err, "no delta T estimate");
                return RawSunTimes::default();
            }
        };
        let at = |horizon| self.crossing(coordinate, date, delta_t, horizon);

        let Some(horizon) = at(Horizon::SunriseSunset) else {
            return RawSunTimes::default();
        };
        let kind = match horizon {
            SunriseResult::RegularDay { .. } => DayKind::Normal,
            SunriseResult::AllDay { .. } => DayKind::PolarDay,
            SunriseResult::AllNight { .. } => DayKind::PolarNight,
        };
        let transit = *horizon.transit();

        let (sunrise, sunset) = rise_and_set(Some(&horizon));
        let (civil_dawn, civil_dusk) = rise_and_set(at(Horizon::CivilTwilight).as_ref());
        let (nautical_dawn, nautical_dusk) = rise_and_set(at(Horizon::NauticalTwilight).as_ref());
        let (astronomical_dawn, astronomical_dusk) =
            rise_and_set(at(Horizon::AstronomicalTwilight).as_ref());
        let (golden_hour_end, golden_hour) =
            rise_and_set(at(Horizon::Custom(GOLDEN_HOUR_ELEVATION)).as_ref());

        RawSunTimes {
            kind,
            solar_noon: Some(transit),
            nadir: Some(transit - Duration::hours(12)),
            sunrise,
            sunset,
            civil_dawn,
            civil_dusk,
            nautical_dawn,
            nautical_dusk,
            astronomical_dawn,
            astronomical_dusk,
            golden_hour_end,
            golden_hour,
        }
    }
}
