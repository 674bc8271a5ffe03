use crate::consts::{JANUARY, MAX_MONTH};
use crate::error::YmonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

const SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LONG_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `YmonError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, YmonError> {
        let non_zero = NonZeroU8::new(value).ok_or(YmonError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(YmonError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds a month from a zero-based offset already reduced modulo 12.
    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!(offset < MAX_MONTH);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based offset from January
    #[inline]
    pub const fn offset(self) -> u8 {
        self.0.get() - JANUARY
    }

    /// Three-letter English abbreviation, e.g. `"Jan"`
    pub const fn short_name(self) -> &'static str {
        SHORT_NAMES[self.offset() as usize]
    }

    /// Full English name, e.g. `"January"`
    pub const fn long_name(self) -> &'static str {
        LONG_NAMES[self.offset() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = YmonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(YmonError::InvalidMonth(0))));
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(13);
        assert!(matches!(result, Err(YmonError::InvalidMonth(13))));

        let result = Month::new(255);
        assert!(matches!(result, Err(YmonError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_from_offset() {
        for offset in 0..12 {
            let month = Month::from_offset(offset);
            assert_eq!(month.get(), offset + 1);
            assert_eq!(month.offset(), offset);
        }
    }

    #[test]
    fn test_month_names() {
        let month = Month::new(1).unwrap();
        assert_eq!(month.short_name(), "Jan");
        assert_eq!(month.long_name(), "January");

        let month = Month::new(12).unwrap();
        assert_eq!(month.short_name(), "Dec");
        assert_eq!(month.long_name(), "December");
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_ordering() {
        let m1 = Month::new(3).unwrap();
        let m2 = Month::new(8).unwrap();
        assert!(m1 < m2);
        assert!(m2 > m1);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }
}
