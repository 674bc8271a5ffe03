mod calendar;
mod codec;
mod consts;
mod convert;
mod error;
mod lenient;
mod prelude;
mod strict;
mod types;
mod vector;

pub use calendar::{
    date_from_days, days_from_months, days_since_epoch, months_since_epoch, parse_zone,
    timestamp_from_wall_clock, utc_timestamp_from_days,
};
pub use codec::{decode, encode, normalize};
pub use consts::*;
pub use convert::{
    Source, as_ymon, as_ymon_with, to_character, to_date, to_datetime, to_double, to_integer,
};
pub use error::{Locations, LossyParseError, ParseWarning, StrictReason, YmonError};
pub use lenient::{LenientParse, ParseOptions, ymon_parse, ymon_parse_with};
pub use strict::{format_ymon, parse_strict};
pub use types::Month;
pub use vector::{Class, Element, Vector};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A calendar month with no day, time, or zone component.
///
/// Stored as the number of months elapsed since January 1970, so ordering
/// and equality follow the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Ymon(i32);

impl Ymon {
    /// January 1970
    pub const EPOCH: Self = Self(0);

    /// Creates a ymon from a year and a month, carrying out-of-range months
    /// into the year.
    ///
    /// # Errors
    /// Returns `YmonError::Overflow` if the month-index does not fit in an `i32`.
    pub fn new(year: i32, month: i32) -> Result<Self, YmonError> {
        codec::encode(year, month).map(Self)
    }

    /// Creates a ymon from an already validated month.
    ///
    /// # Errors
    /// Returns `YmonError::Overflow` if the month-index does not fit in an `i32`.
    pub fn from_parts(year: i32, month: Month) -> Result<Self, YmonError> {
        Self::new(year, i32::from(month.get()))
    }

    /// Wraps a raw month-index
    pub const fn from_index(index: i32) -> Self {
        Self(index)
    }

    /// Months elapsed since January 1970
    #[inline]
    pub const fn index(self) -> i32 {
        self.0
    }

    pub fn year(self) -> i32 {
        self.to_parts().0
    }

    pub fn month(self) -> Month {
        self.to_parts().1
    }

    pub fn to_parts(self) -> (i32, Month) {
        codec::decode(self.0)
    }
}

impl fmt::Display for Ymon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month) = self.to_parts();
        let sign = if year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:0year_width$}{DATE_SEPARATOR}{:0month_width$}",
            year.unsigned_abs(),
            month.get(),
            year_width = YEAR_WIDTH,
            month_width = MONTH_WIDTH,
        )
    }
}

impl FromStr for Ymon {
    type Err = LossyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        strict::parse_element(s).map_err(|failure| LossyParseError {
            locations: Locations::from_indices([0]),
            reason:    failure,
        })
    }
}

impl serde::Serialize for Ymon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Ymon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
