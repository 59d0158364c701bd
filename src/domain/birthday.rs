//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire and storage format for every date in the system.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono alone would accept unpadded days and signed years.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex")
});

/// A contact's birthday, a real calendar date written as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("12.05.1990").unwrap();
/// assert_eq!(birthday.to_string(), "12.05.1990");
/// assert!(BirthdayDate::new("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the input has a
    /// different shape or names a day that does not exist.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        if !DATE_SHAPE_REGEX.is_match(&date) {
            return Err(ValidationError::InvalidDateFormat(date));
        }

        match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
            Ok(parsed) => Ok(Self(parsed)),
            Err(_) => Err(ValidationError::InvalidDateFormat(date)),
        }
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// Feb 29 falls on Mar 1 when `year` is not a leap year. Returns `None`
    /// only if `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
