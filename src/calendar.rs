//! Bridge between month-indices and civil dates/timestamps.
//!
//! Backed by `chrono` for day arithmetic and `chrono-tz` for IANA zones.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::{
    EPOCH_YEAR, JANUARY, SECONDS_PER_DAY, WALL_CLOCK_FORMAT, Ymon, codec, error::YmonError,
};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(EPOCH_YEAR, u32::from(JANUARY), 1).unwrap_or_default()
}

/// Days between 1970-01-01 and `date`; negative before the epoch.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}

/// Inverse of `days_since_epoch`.
///
/// # Errors
/// Returns `YmonError::Calendar` if the day lies outside chrono's date range.
pub fn date_from_days(days: i64) -> Result<NaiveDate, YmonError> {
    let offset = Days::new(days.unsigned_abs());
    let date = if days >= 0 {
        epoch().checked_add_days(offset)
    } else {
        epoch().checked_sub_days(offset)
    };
    date.ok_or_else(|| YmonError::Calendar(format!("{days} days from epoch is out of range")))
}

/// Month-index of the month containing `date`; finer units are truncated.
///
/// # Errors
/// Never fails for dates chrono can represent; kept fallible to match
/// `codec::encode`.
pub fn months_since_epoch(date: NaiveDate) -> Result<Ymon, YmonError> {
    // chrono months are 1..=12
    #[allow(clippy::cast_possible_wrap)]
    let month = date.month() as i32;
    Ymon::new(date.year(), month)
}

/// Days between 1970-01-01 and the first day of `ym`.
///
/// # Errors
/// Returns `YmonError::Calendar` if the year lies outside chrono's date range.
pub fn days_from_months(ym: Ymon) -> Result<i64, YmonError> {
    let (year, month) = codec::decode(ym.index());
    let first = NaiveDate::from_ymd_opt(year, u32::from(month.get()), 1)
        .ok_or_else(|| YmonError::Calendar(format!("{ym} is outside the supported date range")))?;
    Ok(days_since_epoch(first))
}

/// Midnight UTC of the given day, computed directly from the day count.
///
/// # Errors
/// Returns `YmonError::Calendar` if the instant cannot be represented.
pub fn utc_timestamp_from_days(days: i64) -> Result<DateTime<Tz>, YmonError> {
    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Tz::UTC))
        .ok_or_else(|| YmonError::Calendar(format!("{days} days from epoch is out of range")))
}

/// Resolves wall-clock text (`%Y-%m-%d %H:%M:%S`) in `tz`.
///
/// Ambiguous times resolve to the earliest instant. Times skipped by a DST
/// gap move forward by the gap, so midnight on a spring-forward day becomes
/// the first valid instant of that day.
///
/// # Errors
/// Returns `YmonError::Calendar` if the text is malformed or cannot be placed
/// in `tz`.
pub fn timestamp_from_wall_clock(text: &str, tz: Tz) -> Result<DateTime<Tz>, YmonError> {
    let naive = NaiveDateTime::parse_from_str(text, WALL_CLOCK_FORMAT)
        .map_err(|e| YmonError::Calendar(format!("Invalid wall-clock time {text:?}: {e}")))?;

    if let Some(resolved) = tz.from_local_datetime(&naive).earliest() {
        return Ok(resolved);
    }

    // No zone has a gap longer than a day; step an hour at a time.
    (1..=24)
        .filter_map(|h| naive.checked_add_signed(TimeDelta::hours(h)))
        .find_map(|shifted| tz.from_local_datetime(&shifted).earliest())
        .ok_or_else(|| YmonError::Calendar(format!("{text} does not exist in {tz}")))
}

/// Looks up an IANA zone name such as `"America/New_York"`.
///
/// # Errors
/// Returns `YmonError::UnknownZone` for names chrono-tz does not know.
pub fn parse_zone(name: &str) -> Result<Tz, YmonError> {
    Tz::from_str(name).map_err(|_e| YmonError::UnknownZone(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(days_since_epoch(date(1970, 1, 1)), 0);
        assert_eq!(days_since_epoch(date(1970, 2, 1)), 31);
        assert_eq!(days_since_epoch(date(1969, 12, 31)), -1);
        assert_eq!(days_since_epoch(date(2000, 1, 1)), 10_957);
    }

    #[test]
    fn test_date_from_days() {
        assert_eq!(date_from_days(0).unwrap(), date(1970, 1, 1));
        assert_eq!(date_from_days(-1).unwrap(), date(1969, 12, 31));
        assert_eq!(date_from_days(10_957).unwrap(), date(2000, 1, 1));
        assert!(matches!(date_from_days(i64::MAX), Err(YmonError::Calendar(_))));
    }

    #[test]
    fn test_months_since_epoch_truncates_day() {
        assert_eq!(months_since_epoch(date(1970, 1, 31)).unwrap(), Ymon::EPOCH);
        assert_eq!(months_since_epoch(date(1969, 12, 1)).unwrap().index(), -1);
        assert_eq!(months_since_epoch(date(2020, 1, 15)).unwrap().index(), 600);
    }

    #[test]
    fn test_days_from_months() {
        assert_eq!(days_from_months(Ymon::EPOCH).unwrap(), 0);
        assert_eq!(days_from_months(Ymon::from_index(1)).unwrap(), 31);
        assert_eq!(days_from_months(Ymon::from_index(-1)).unwrap(), -31);
        assert!(matches!(
            days_from_months(Ymon::from_index(i32::MAX)),
            Err(YmonError::Calendar(_))
        ));
    }

    #[test]
    fn test_utc_timestamp_from_days() {
        let ts = utc_timestamp_from_days(31).unwrap();
        assert_eq!(ts.timezone(), Tz::UTC);
        assert_eq!(ts.date_naive(), date(1970, 2, 1));
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_timestamp_from_wall_clock() {
        let tz = parse_zone("America/New_York").unwrap();
        let ts = timestamp_from_wall_clock("2020-01-01 00:00:00", tz).unwrap();
        assert_eq!(ts.naive_local(), date(2020, 1, 1).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(ts.timestamp(), 1_577_854_800);
    }

    #[test]
    fn test_timestamp_from_wall_clock_dst_gap() {
        // Sao Paulo skipped midnight on 2018-11-04
        let tz = parse_zone("America/Sao_Paulo").unwrap();
        let ts = timestamp_from_wall_clock("2018-11-04 00:00:00", tz).unwrap();
        assert_eq!(ts.date_naive(), date(2018, 11, 4));
        assert_eq!(ts.hour(), 1);
    }

    #[test]
    fn test_timestamp_from_wall_clock_malformed() {
        let result = timestamp_from_wall_clock("2020-01", Tz::UTC);
        assert!(matches!(result, Err(YmonError::Calendar(_))));
    }

    #[test]
    fn test_parse_zone_unknown() {
        let result = parse_zone("Mars/Olympus_Mons");
        assert!(matches!(result, Err(YmonError::UnknownZone(_))));
    }
}
