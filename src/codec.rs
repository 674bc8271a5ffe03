//! Month-index encoding.
//!
//! A month-index counts months elapsed since January of `EPOCH_YEAR`.
//! Both directions use floor division, so negative indices decode to a
//! month in `1..=12` of an earlier year rather than a negative month.

use crate::{EPOCH_YEAR, MONTHS_PER_YEAR, error::YmonError, types::Month};

/// Encodes a year and a possibly unnormalized month into a month-index.
///
/// Months outside `1..=12` carry into the year, so `(2000, 13)` encodes the
/// same index as `(2001, 1)` and `(2000, 0)` the same as `(1999, 12)`.
///
/// # Errors
/// Returns `YmonError::Overflow` if the index does not fit in an `i32`.
pub fn encode(year: i32, month: i32) -> Result<i32, YmonError> {
    let index = (i64::from(year) - i64::from(EPOCH_YEAR)) * i64::from(MONTHS_PER_YEAR)
        + (i64::from(month) - 1);
    i32::try_from(index).map_err(|_| YmonError::Overflow {
        year:  i64::from(year),
        month: i64::from(month),
    })
}

/// Decodes a month-index into its canonical year and month.
///
/// Every `i32` index decodes; the year of `i32::MIN` is still well inside
/// the `i32` range.
pub fn decode(index: i32) -> (i32, Month) {
    let year = index.div_euclid(MONTHS_PER_YEAR) + EPOCH_YEAR;
    // rem_euclid is in 0..12
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = index.rem_euclid(MONTHS_PER_YEAR) as u8;
    (year, Month::from_offset(offset))
}

/// Canonical `(year, month)` for an arbitrary pair, month in `1..=12`.
///
/// # Errors
/// Returns `YmonError::Overflow` if the pair lies outside the encodable range.
pub fn normalize(year: i32, month: i32) -> Result<(i32, Month), YmonError> {
    encode(year, month).map(decode)
}

/// The `i32` equal to `value`, if there is one.
///
/// Fractional, infinite, NaN, and out-of-range values have none.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn exact_i32(value: f64) -> Option<i32> {
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}
