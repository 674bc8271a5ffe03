//! Named vectors with missing values.
//!
//! `Vector<T>` is an ordered sequence of nullable elements with optional
//! parallel names. Every transformation builds a new vector; names travel
//! with their positions unless a step drops them explicitly.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::{NA_DISPLAY, Ymon, error::YmonError, prelude::*};

/// Declared type of a vector, used for dispatch and display headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Class {
    #[display(fmt = "ymon")]
    Ymon,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "datetime")]
    DateTime,
    #[display(fmt = "integer")]
    Integer,
    #[display(fmt = "double")]
    Double,
    #[display(fmt = "character")]
    Character,
    #[display(fmt = "logical")]
    Logical,
}

/// Element types a `Vector` can hold.
pub trait Element: Clone + fmt::Display {
    const CLASS: Class;
}

impl Element for Ymon {
    const CLASS: Class = Class::Ymon;
}

impl Element for NaiveDate {
    const CLASS: Class = Class::Date;
}

impl Element for DateTime<Tz> {
    const CLASS: Class = Class::DateTime;
}

impl Element for i32 {
    const CLASS: Class = Class::Integer;
}

impl Element for f64 {
    const CLASS: Class = Class::Double;
}

impl Element for String {
    const CLASS: Class = Class::Character;
}

impl Element for bool {
    const CLASS: Class = Class::Logical;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    values: Vec<Option<T>>,
    names:  Option<Vec<String>>,
}

impl<T: Element> Vector<T> {
    /// Creates an unnamed vector; `None` marks a missing element.
    pub const fn new(values: Vec<Option<T>>) -> Self {
        Self { values, names: None }
    }

    /// Attaches names, one per element.
    ///
    /// # Errors
    /// Returns `YmonError::NameLength` if the lengths differ.
    pub fn with_names<S>(mut self, names: Vec<S>) -> Result<Self, YmonError>
    where
        S: Into<String>,
    {
        if names.len() != self.values.len() {
            return Err(YmonError::NameLength {
                expected: self.values.len(),
                actual:   names.len(),
            });
        }
        self.names = Some(names.into_iter().map(Into::into).collect());
        Ok(self)
    }

    pub const fn class(&self) -> Class {
        T::CLASS
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True for missing elements and for positions past the end.
    pub fn is_na(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index).and_then(Option::as_ref)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.as_ref()?.get(index).map(String::as_str)
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.values.iter().map(Option::as_ref)
    }

    #[must_use]
    pub fn drop_names(mut self) -> Self {
        self.names = None;
        self
    }

    /// Copies the names of `source` onto `self`.
    ///
    /// Used after conversion steps that do not carry names through.
    ///
    /// # Errors
    /// Returns `YmonError::NameLength` if the two vectors differ in length.
    pub fn reattach_names<U: Element>(self, source: &Vector<U>) -> Result<Self, YmonError> {
        match source.names() {
            Some(names) => self.with_names(names.to_vec()),
            None => Ok(self.drop_names()),
        }
    }

    /// Applies `f` to every present element, keeping names and missingness.
    pub fn map<U, F>(&self, mut f: F) -> Vector<U>
    where
        U: Element,
        F: FnMut(&T) -> U,
    {
        Vector {
            values: self.values.iter().map(|v| v.as_ref().map(&mut f)).collect(),
            names:  self.names.clone(),
        }
    }

    /// Fallible `map` that stops at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Vector<U>, E>
    where
        U: Element,
        F: FnMut(&T) -> Result<U, E>,
    {
        let values = self
            .values
            .iter()
            .map(|v| v.as_ref().map(&mut f).transpose())
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Vector {
            values,
            names: self.names.clone(),
        })
    }

    /// New vector of the same length carrying `self`'s names.
    pub(crate) fn rebuild<U: Element>(&self, values: Vec<Option<U>>) -> Vector<U> {
        debug_assert_eq!(values.len(), self.values.len());
        Vector {
            values,
            names: self.names.clone(),
        }
    }

    pub fn into_values(self) -> Vec<Option<T>> {
        self.values
    }
}

impl Vector<Ymon> {
    /// Builds a ymon vector straight from month-indices.
    pub fn from_raw(indices: Vec<Option<i32>>) -> Self {
        Self::new(indices.into_iter().map(|i| i.map(Ymon::from_index)).collect())
    }

    /// Month-indices, with names dropped.
    pub fn to_raw(&self) -> Vec<Option<i32>> {
        self.values.iter().map(|v| v.map(Ymon::index)).collect()
    }
}

impl<T: Element> FromIterator<Option<T>> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}[{}]>", T::CLASS, self.len())?;
        if self.is_empty() {
            return Ok(());
        }

        let cells: Vec<String> = self
            .iter()
            .map(|v| v.map_or_else(|| NA_DISPLAY.to_owned(), ToString::to_string))
            .collect();

        match &self.names {
            None => write!(f, "\n{}", cells.join(" ")),
            Some(names) => {
                let widths: Vec<usize> = names
                    .iter()
                    .zip(&cells)
                    .map(|(n, c)| n.chars().count().max(c.chars().count()))
                    .collect();
                let header: Vec<String> = names
                    .iter()
                    .zip(&widths)
                    .map(|(n, w)| format!("{n:>w$}"))
                    .collect();
                let row: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| format!("{c:>w$}"))
                    .collect();
                write!(f, "\n{}\n{}", header.join(" "), row.join(" "))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymon(year: i32, month: i32) -> Ymon {
        Ymon::new(year, month).unwrap()
    }

    #[test]
    fn test_with_names_length_mismatch() {
        let v = Vector::from(vec![1_i32, 2]);
        let result = v.with_names(vec!["a"]);
        assert!(matches!(
            result,
            Err(YmonError::NameLength {
                expected: 2,
                actual:   1
            })
        ));
    }

    #[test]
    fn test_accessors() {
        let v = Vector::new(vec![Some(1_i32), None])
            .with_names(vec!["a", "b"])
            .unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.class(), Class::Integer);
        assert!(!v.is_na(0));
        assert!(v.is_na(1));
        assert!(v.is_na(5));
        assert_eq!(v.get(0), Some(&1));
        assert_eq!(v.name(1), Some("b"));
        assert_eq!(v.names(), Some(&["a".to_owned(), "b".to_owned()][..]));
    }

    #[test]
    fn test_map_preserves_names_and_missingness() {
        let v = Vector::new(vec![Some(1_i32), None, Some(3)])
            .with_names(vec!["x", "y", "z"])
            .unwrap();
        let doubled = v.map(|i| f64::from(*i) * 2.0);
        assert_eq!(doubled.values(), &[Some(2.0), None, Some(6.0)]);
        assert_eq!(doubled.name(2), Some("z"));
    }

    #[test]
    fn test_reattach_names() {
        let named = Vector::from(vec![1_i32, 2]).with_names(vec!["a", "b"]).unwrap();
        let bare = Vector::from(vec![1.0_f64, 2.0]);
        let restored = bare.reattach_names(&named).unwrap();
        assert_eq!(restored.name(0), Some("a"));

        let unnamed = Vector::from(vec![1_i32, 2]);
        let cleared = restored.reattach_names(&unnamed).unwrap();
        assert_eq!(cleared.names(), None);
    }

    #[test]
    fn test_from_raw_to_raw() {
        let v = Vector::from_raw(vec![Some(0), None, Some(-1)]);
        assert_eq!(v.get(2), Some(&ymon(1969, 12)));
        assert_eq!(v.to_raw(), vec![Some(0), None, Some(-1)]);
    }

    #[test]
    fn test_display_empty() {
        let v: Vector<Ymon> = Vector::new(Vec::new());
        assert_eq!(v.to_string(), "<ymon[0]>");
    }

    #[test]
    fn test_display_missing_uses_null_token() {
        let v = Vector::new(vec![Some(ymon(1970, 1)), None]);
        assert_eq!(v.to_string(), "<ymon[2]>\n1970-01 <NA>");
    }

    #[test]
    fn test_display_string_na_is_data() {
        let missing: Vector<String> = Vector::new(vec![None]);
        let literal: Vector<String> = Vector::from(vec!["NA".to_owned()]);
        assert_ne!(missing.to_string(), literal.to_string());
    }

    #[test]
    fn test_display_with_names() {
        let v = Vector::new(vec![Some(ymon(2019, 3)), None])
            .with_names(vec!["start", "x"])
            .unwrap();
        assert_eq!(v.to_string(), "<ymon[2]>\n  start    x\n2019-03 <NA>");
    }
}
