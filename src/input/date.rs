//! Date utilities: parsing input dates into epoch milliseconds.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Clock used to turn naive input dates into instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    #[default]
    Local,
    Utc,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `raw` with the first matching format. Date-only formats resolve to
/// midnight.
pub fn parse_naive(raw: &str, formats: &[String]) -> Option<NaiveDateTime> {
    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, fmt)
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
    })
}

pub fn to_epoch_millis(dt: NaiveDateTime, basis: TimeBasis) -> AppResult<i64> {
    match basis {
        TimeBasis::Utc => Ok(dt.and_utc().timestamp_millis()),
        TimeBasis::Local => Local
            .from_local_datetime(&dt)
            .earliest()
            .map(|t| t.timestamp_millis())
            .ok_or_else(|| AppError::InvalidDate(format!("{dt} does not exist in local time"))),
    }
}

pub fn parse_timestamp(raw: &str, formats: &[String], basis: TimeBasis) -> AppResult<i64> {
    let dt = parse_naive(raw, formats).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
    to_epoch_millis(dt, basis)
}

/// Last millisecond of `date`.
pub fn end_of_day(date: NaiveDate, basis: TimeBasis) -> AppResult<i64> {
    let dt = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    to_epoch_millis(dt, basis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formats() -> Vec<String> {
        vec!["%Y-%m-%d".into(), "%Y-%m-%dT%H:%M:%S".into(), "%d/%m/%Y".into()]
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let ms = parse_timestamp("1970-01-02", &formats(), TimeBasis::Utc).unwrap();
        assert_eq!(ms, 86_400_000);
    }

    #[test]
    fn datetime_formats_keep_the_time() {
        let ms = parse_timestamp("1970-01-01T01:00:00", &formats(), TimeBasis::Utc).unwrap();
        assert_eq!(ms, 3_600_000);
    }

    #[test]
    fn later_formats_are_tried_in_order() {
        let a = parse_timestamp("02/01/1970", &formats(), TimeBasis::Utc).unwrap();
        assert_eq!(a, 86_400_000);
    }

    #[test]
    fn unknown_format_is_an_invalid_date() {
        assert!(matches!(
            parse_timestamp("yesterday", &formats(), TimeBasis::Utc),
            Err(AppError::InvalidDate(s)) if s == "yesterday"
        ));
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(end_of_day(date, TimeBasis::Utc).unwrap(), 86_399_999);
    }
}
