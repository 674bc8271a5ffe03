//! Coercions between ymon vectors and other vector types.
//!
//! `as_ymon` dispatches on a closed set of source types. The inverse
//! functions convert a ymon vector into each of them.
//!
//! Names follow their positions through every leg. The numeric legs
//! (double to ymon, ymon to integer, ymon to double) work on raw values
//! and reattach the source names afterwards.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::{
    Vector, Ymon,
    calendar::{
        date_from_days, days_from_months, days_since_epoch, months_since_epoch,
        timestamp_from_wall_clock, utc_timestamp_from_days,
    },
    codec::exact_i32,
    error::{Locations, YmonError},
    lenient::{LenientParse, ParseOptions, ymon_parse_with},
    prelude::*,
    strict::format_ymon,
    vector::Class,
};

/// Midnight of a date, as wall-clock text for zone-aware re-parsing.
const MIDNIGHT_FORMAT: &str = "%Y-%m-%d 00:00:00";

/// Any vector `as_ymon` accepts as input.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Source {
    Ymon(Vector<Ymon>),
    Date(Vector<NaiveDate>),
    DateTime(Vector<DateTime<Tz>>),
    Integer(Vector<i32>),
    Double(Vector<f64>),
    Text(Vector<String>),
    Logical(Vector<bool>),
}

impl Source {
    pub const fn class(&self) -> Class {
        match self {
            Self::Ymon(_) => Class::Ymon,
            Self::Date(_) => Class::Date,
            Self::DateTime(_) => Class::DateTime,
            Self::Integer(_) => Class::Integer,
            Self::Double(_) => Class::Double,
            Self::Text(_) => Class::Character,
            Self::Logical(_) => Class::Logical,
        }
    }
}

/// Converts `x` to ymon, parsing text with the default lenient options.
///
/// Any lenient-parse warning is logged and dropped; use `as_ymon_with` to
/// inspect it.
///
/// # Errors
/// See `as_ymon_with`.
pub fn as_ymon(x: impl Into<Source>) -> Result<Vector<Ymon>, YmonError> {
    as_ymon_with(x, &ParseOptions::default()).map(LenientParse::into_values)
}

/// Converts `x` to ymon.
///
/// # Errors
/// - `YmonError::Type` for sources with no ymon conversion.
/// - `YmonError::Range` for doubles that are not whole 32-bit integers.
/// - `YmonError::Calendar` / `YmonError::Overflow` for dates beyond the
///   month-index range.
pub fn as_ymon_with(
    x: impl Into<Source>,
    options: &ParseOptions,
) -> Result<LenientParse, YmonError> {
    let source = x.into();
    tracing::debug!(class = %source.class(), "coercing to ymon");

    let values = match source {
        Source::Ymon(v) => v,
        Source::Date(v) => from_dates(&v)?,
        Source::DateTime(v) => from_datetimes(&v)?,
        Source::Integer(v) => v.map(|i| Ymon::from_index(*i)),
        Source::Double(v) => from_doubles(&v)?,
        Source::Text(v) => return Ok(ymon_parse_with(&v, options)),
        other => return Err(YmonError::Type { class: other.class() }),
    };
    Ok(LenientParse {
        values,
        warning: None,
    })
}

fn from_dates(x: &Vector<NaiveDate>) -> Result<Vector<Ymon>, YmonError> {
    x.try_map(|d| months_since_epoch(*d))
}

// The zone is dropped before counting months: the local calendar date is
// what decides the month, and it sidesteps DST when measuring day distances.
fn from_datetimes(x: &Vector<DateTime<Tz>>) -> Result<Vector<Ymon>, YmonError> {
    from_dates(&x.map(|ts| ts.naive_local().date()))
}

fn from_doubles(x: &Vector<f64>) -> Result<Vector<Ymon>, YmonError> {
    let mut lossy = Vec::new();
    let raw: Vec<Option<i32>> = x
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let v = v.filter(|v| !v.is_nan())?;
            let cast = exact_i32(*v);
            if cast.is_none() {
                lossy.push(i);
            }
            cast
        })
        .collect();

    if !lossy.is_empty() {
        return Err(YmonError::Range {
            locations: Locations::from_indices(lossy),
        });
    }

    // raw carries no names; reattach the source's
    Ok(x.rebuild(raw.into_iter().map(|i| i.map(Ymon::from_index)).collect()))
}

/// First day of each month.
///
/// # Errors
/// Returns `YmonError::Calendar` for months outside chrono's date range.
pub fn to_date(x: &Vector<Ymon>) -> Result<Vector<NaiveDate>, YmonError> {
    x.try_map(|ym| days_from_months(*ym).and_then(date_from_days))
}

/// Midnight at the start of each month in `tz`.
///
/// UTC is computed straight from the day count. Other zones go through
/// wall-clock text so the zone rules place midnight correctly.
///
/// # Errors
/// Returns `YmonError::Calendar` for months outside chrono's date range.
pub fn to_datetime(x: &Vector<Ymon>, tz: Tz) -> Result<Vector<DateTime<Tz>>, YmonError> {
    let dates = to_date(x)?;
    if tz == Tz::UTC {
        dates.try_map(|d| utc_timestamp_from_days(days_since_epoch(*d)))
    } else {
        dates.try_map(|d| timestamp_from_wall_clock(&d.format(MIDNIGHT_FORMAT).to_string(), tz))
    }
}

/// Month-indices as integers.
pub fn to_integer(x: &Vector<Ymon>) -> Vector<i32> {
    // to_raw drops names; reattach them
    x.rebuild(x.to_raw())
}

/// Month-indices as doubles.
pub fn to_double(x: &Vector<Ymon>) -> Vector<f64> {
    let raw = x.to_raw().into_iter().map(|i| i.map(f64::from)).collect();
    x.rebuild(raw)
}

/// Canonical `YYYY-MM` text; missing stays missing.
pub fn to_character(x: &Vector<Ymon>) -> Vector<String> {
    format_ymon(x)
}
