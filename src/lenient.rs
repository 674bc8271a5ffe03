//! Best-effort text to ymon parsing.
//!
//! Each element is tried against the canonical form and then against every
//! configured format in order. Elements that match nothing become missing
//! and are reported together in one `ParseWarning`; the call never fails.

use chrono::{
    NaiveDate,
    format::{Parsed, StrftimeItems, parse},
};
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_FORMATS, Vector, Ymon,
    calendar::months_since_epoch,
    error::{Locations, ParseWarning},
    strict,
};

/// Lenient parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// `strftime`-style formats, tried in order after the canonical form.
    pub formats: Vec<String>,
    /// Strip surrounding whitespace before matching.
    pub trim:    bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            formats: DEFAULT_FORMATS.iter().map(|f| (*f).to_owned()).collect(),
            trim:    true,
        }
    }
}

impl ParseOptions {
    /// Options accepting exactly the given formats.
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn parse_one(&self, input: &str) -> Option<Ymon> {
        let input = if self.trim { input.trim() } else { input };
        if let Ok(ym) = strict::parse_element(input) {
            return Some(ym);
        }
        self.formats
            .iter()
            .find_map(|format| parse_with_format(input, format))
    }
}

// Full dates go straight through chrono. Formats without a day of month
// leave it unset in `Parsed`; those are pinned to the 1st.
fn parse_with_format(input: &str, format: &str) -> Option<Ymon> {
    let date = NaiveDate::parse_from_str(input, format).ok().or_else(|| {
        let mut parsed = Parsed::new();
        parse(&mut parsed, input, StrftimeItems::new(format)).ok()?;
        if parsed.day().is_none() && parsed.ordinal().is_none() {
            parsed.set_day(1).ok()?;
        }
        parsed.to_naive_date().ok()
    })?;
    months_since_epoch(date).ok()
}

/// Outcome of a lenient parse: a full-length result plus an optional warning.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientParse {
    pub values:  Vector<Ymon>,
    pub warning: Option<ParseWarning>,
}

impl LenientParse {
    /// Positions that failed to parse; empty when there is no warning.
    pub fn failures(&self) -> Locations {
        self.warning
            .as_ref()
            .map(|w| w.locations.clone())
            .unwrap_or_default()
    }

    pub fn into_values(self) -> Vector<Ymon> {
        self.values
    }
}

/// Parses with `ParseOptions::default()`.
pub fn ymon_parse(x: &Vector<String>) -> LenientParse {
    ymon_parse_with(x, &ParseOptions::default())
}

/// Parses every element independently; missing inputs stay missing and are
/// not failures.
pub fn ymon_parse_with(x: &Vector<String>, options: &ParseOptions) -> LenientParse {
    let mut failed = Vec::new();
    let values = x
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let input = v?;
            let parsed = options.parse_one(input);
            if parsed.is_none() {
                failed.push(i);
            }
            parsed
        })
        .collect();

    let warning = (!failed.is_empty()).then(|| ParseWarning {
        locations: Locations::from_indices(failed),
    });
    if let Some(w) = &warning {
        tracing::warn!(failures = w.locations.len(), "{w}");
    }

    LenientParse {
        values: x.rebuild(values),
        warning,
    }
}
