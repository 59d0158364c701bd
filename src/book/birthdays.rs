//! Birthday scheduling: when to congratulate a contact.
//!
//! A birthday is congratulated on its next anniversary on or after today.
//! Anniversaries landing on a weekend move to the following Monday, never
//! backwards and never off a weekday.

use crate::domain::{BirthdayDate, ContactName, DATE_FORMAT};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Window used by `birthdays` when no day count is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact due for congratulations and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn new(name: ContactName, congratulation_date: NaiveDate) -> Self {
        Self {
            name,
            congratulation_date,
        }
    }

    /// The congratulation date as `DD.MM.YYYY`.
    pub fn congratulation_date_string(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// Resolve the date on which `birthday` should be congratulated, seen from
/// `today`.
///
/// 1. Take the anniversary in `today`'s year.
/// 2. If it is already behind `today`, take next year's instead.
/// 3. Move a Saturday or Sunday to the following Monday.
///
/// Returns `None` only when the date leaves chrono's representable range.
pub fn congratulation_date(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut anniversary = birthday.occurrence_in(today.year())?;
    if anniversary < today {
        anniversary = birthday.occurrence_in(today.year() + 1)?;
    }
    shift_weekend_to_monday(anniversary)
}

fn shift_weekend_to_monday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}
