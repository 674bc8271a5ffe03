//! Round-trip exact text form: `[-]YYYY-MM`.
//!
//! Formatting always succeeds. Parsing is all-or-nothing: any bad element
//! aborts the whole call with a `LossyParseError`.

use crate::{
    DATE_SEPARATOR, MAX_MONTH, Vector, Ymon,
    error::{Locations, LossyParseError, StrictReason},
};

/// Renders every element in the canonical form, keeping names.
pub fn format_ymon(x: &Vector<Ymon>) -> Vector<String> {
    x.map(ToString::to_string)
}

/// Parses canonical text back into ymon values.
///
/// Missing inputs stay missing. A leading `-` is the sign of the year.
///
/// # Errors
/// Returns a `LossyParseError` listing every position that fails the
/// earliest failing check.
pub fn parse_strict(x: &Vector<String>) -> Result<Vector<Ymon>, LossyParseError> {
    let attempts: Vec<Option<Result<Ymon, StrictReason>>> = x
        .iter()
        .map(|v| v.map(|s| parse_element(s)))
        .collect();

    let first_reason = attempts
        .iter()
        .filter_map(|a| a.as_ref().and_then(|r| r.err()))
        .min();

    if let Some(reason) = first_reason {
        let failing = attempts
            .iter()
            .enumerate()
            .filter(|(_, a)| matches!(a, Some(Err(r)) if *r == reason))
            .map(|(i, _)| i);
        return Err(LossyParseError {
            locations: Locations::from_indices(failing),
            reason,
        });
    }

    let values = attempts
        .into_iter()
        .map(|a| a.and_then(Result::ok))
        .collect();
    Ok(x.rebuild(values))
}

pub(crate) fn parse_element(s: &str) -> Result<Ymon, StrictReason> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let separator_count = body.matches(DATE_SEPARATOR).count();
    let (year_str, month_str) = match separator_count {
        0 => return Err(StrictReason::MissingSeparator),
        1 => body
            .split_once(DATE_SEPARATOR)
            .ok_or(StrictReason::MissingSeparator)?,
        _ => return Err(StrictReason::ExtraSeparator),
    };

    let year = parse_integer(year_str)?;
    let month = parse_integer(month_str)?;
    let year = if negative { -year } else { year };

    if !(1..=i64::from(MAX_MONTH)).contains(&month) {
        return Err(StrictReason::MonthOutOfRange);
    }

    let year = i32::try_from(year).map_err(|_| StrictReason::OutOfRange)?;
    let month = i32::try_from(month).map_err(|_| StrictReason::MonthOutOfRange)?;
    Ymon::new(year, month).map_err(|_| StrictReason::OutOfRange)
}

// Plain integers of any size are integers; an oversized one is a range
// problem, not a format one. Decimal text such as "2019.0" is accepted when
// integral. "inf" and "NaN" parse as f64 but are not finite.
#[allow(clippy::cast_possible_truncation)]
fn parse_integer(s: &str) -> Result<i64, StrictReason> {
    let trimmed = s.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        // saturates beyond i64, which still lands out of range
        .map(|v| v as i64)
        .ok_or(StrictReason::NonInteger)
}
