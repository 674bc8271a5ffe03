use std::fmt;

use crate::{MAX_REPORTED_LOCATIONS, prelude::*, vector::Class};

/// Element positions reported in warnings and errors.
///
/// Positions are stored 1-based and ascending. Display lists at most
/// `MAX_REPORTED_LOCATIONS` of them before `etc.`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locations(Vec<usize>);

impl Locations {
    /// Builds from zero-based indices.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut positions: Vec<usize> = indices.into_iter().map(|i| i + 1).collect();
        positions.sort_unstable();
        positions.dedup();
        Self(positions)
    }

    /// 1-based positions
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// Zero-based indices
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|p| p - 1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether display cuts the list short with `etc.`
    pub fn is_truncated(&self) -> bool {
        self.0.len() > MAX_REPORTED_LOCATIONS
    }

    /// Sentence terminator to follow the list; `etc.` already ends one.
    pub(crate) fn terminator(&self) -> &'static str {
        if self.is_truncated() { "" } else { "." }
    }

    pub(crate) fn referent(&self) -> &'static str {
        if self.0.len() == 1 {
            "that location"
        } else {
            "those locations"
        }
    }
}

impl fmt::Display for Locations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "location" } else { "locations" };
        let shown: Vec<String> = self
            .0
            .iter()
            .take(MAX_REPORTED_LOCATIONS)
            .map(ToString::to_string)
            .collect();
        write!(f, "{noun} {}", shown.join(", "))?;
        if self.is_truncated() {
            f.write_str(", etc.")?;
        }
        Ok(())
    }
}

/// Why the strict codec rejected its input.
///
/// Variants are ordered by the stage that checks them; the earliest stage
/// with any failure is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum StrictReason {
    #[display(fmt = "Input must have a dash separator.")]
    MissingSeparator,
    #[display(fmt = "Input must only have one dash separator.")]
    ExtraSeparator,
    #[display(fmt = "Year and month components must be integers.")]
    NonInteger,
    #[display(fmt = "Month component must be between 1 and 12.")]
    MonthOutOfRange,
    #[display(fmt = "Year is outside the representable ymon range.")]
    OutOfRange,
}

/// Aggregated failure of a strict text to ymon parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lossy parse to ymon at {locations}{}\n* {reason}", .locations.terminator())]
pub struct LossyParseError {
    pub locations: Locations,
    pub reason:    StrictReason,
}

/// Non-fatal report from the lenient parser.
///
/// Display renders the exact user-facing warning text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub locations: Locations,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to parse to ymon at {}{} Returning `NA` at {}.",
            self.locations,
            self.locations.terminator(),
            self.locations.referent()
        )
    }
}

/// Fatal conditions raised by ymon construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YmonError {
    /// Input type has no conversion to ymon.
    #[error("Can't convert `{class}` to `ymon`.")]
    Type { class: Class },

    /// Numeric input not exactly representable as a 32-bit integer.
    #[error("Can't convert double to ymon without loss of precision at {locations}{}", .locations.terminator())]
    Range { locations: Locations },

    /// Strict codec abort.
    #[error(transparent)]
    LossyParse(#[from] LossyParseError),

    /// Month-index outside the signed 32-bit range.
    #[error("Month-index for year {year}, month {month} overflows a 32-bit integer")]
    Overflow { year: i64, month: i64 },

    /// Month value outside 1..=12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Names do not line up with values.
    #[error("Names must have the same length as values: expected {expected}, found {actual}")]
    NameLength { expected: usize, actual: usize },

    /// Value outside what the calendar backend can represent.
    #[error("Calendar conversion failed: {0}")]
    Calendar(String),

    /// Unknown IANA timezone name.
    #[error("Unknown timezone: {0}")]
    UnknownZone(String),
}
