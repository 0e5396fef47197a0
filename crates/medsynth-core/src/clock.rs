//! Random visit timestamps inside a date window and a daily clock window.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use medsynth_model::ConfigError;
use rand::Rng;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";
const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` clock time.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).map_err(|_| {
        ConfigError::InvalidTime {
            value: value.to_string(),
        }
    })
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitClock {
    start: NaiveDate,
    end: NaiveDate,
    min_time: NaiveTime,
    max_time: NaiveTime,
}

impl Default for VisitClock {
    /// Calendar year 2024, 09:00 to 21:00.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            min_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            max_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
        }
    }
}

impl VisitClock {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        min_time: NaiveTime,
        max_time: NaiveTime,
    ) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidDateWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        if min_time > max_time {
            return Err(ConfigError::InvalidTimeWindow {
                min: min_time.format(TIME_OF_DAY_FORMAT).to_string(),
                max: max_time.format(TIME_OF_DAY_FORMAT).to_string(),
            });
        }
        Ok(Self {
            start,
            end,
            min_time,
            max_time,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Uniform day in the date window, uniform second in the clock window.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let days = (self.end - self.start).num_days();
        let date = self.start + TimeDelta::days(rng.random_range(0..=days));
        let seconds = rng.random_range(
            self.min_time.num_seconds_from_midnight()..=self.max_time.num_seconds_from_midnight(),
        );
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(self.min_time);
        date.and_time(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_window_samples_stay_inside() {
        let clock = VisitClock::default();
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..1000 {
            let at = clock.sample(&mut rng);
            assert_eq!(at.year(), 2024);
            let minutes = at.hour() * 60 + at.minute();
            assert!((9 * 60..=21 * 60).contains(&minutes), "{at}");
        }
    }

    #[test]
    fn formats_without_seconds() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 59)
            .unwrap();
        assert_eq!(format_timestamp(&at), "2024-03-05T09:07");
    }

    #[test]
    fn single_day_single_minute_window() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let noon = parse_time_of_day("12:00").unwrap();
        let clock = VisitClock::new(day, day, noon, noon).unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(format_timestamp(&clock.sample(&mut rng)), "2024-07-01T12:00");
    }

    #[test]
    fn rejects_inverted_windows() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        let nine = parse_time_of_day("09:00").unwrap();
        let five = parse_time_of_day("17:00").unwrap();
        assert!(matches!(
            VisitClock::new(later, day, nine, five),
            Err(ConfigError::InvalidDateWindow { .. })
        ));
        assert_eq!(
            VisitClock::new(day, later, five, nine).unwrap_err(),
            ConfigError::InvalidTimeWindow {
                min: "17:00".to_string(),
                max: "09:00".to_string()
            }
        );
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(matches!(
            parse_time_of_day("9 o'clock"),
            Err(ConfigError::InvalidTime { .. })
        ));
    }
}
