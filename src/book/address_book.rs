//! AddressBook: an insertion-ordered, name-keyed map of contacts.

use super::birthdays::{congratulation_date, UpcomingBirthday};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// Every contact, keyed by name.
///
/// A name maps to at most one record. Iteration follows the order names were
/// first inserted; overwriting a name keeps its position, deleting it
/// forgets the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already stored
    /// under that name. Returns the replaced record.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Exact-name lookup for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Returns whether one existed.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_none() {
            return false;
        }
        self.order.retain(|key| key != name);
        true
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose congratulation date falls within `window_days` of
    /// `today`, both ends inclusive.
    ///
    /// Records without a birthday are skipped. The result follows the
    /// book's iteration order, not date order.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = congratulation_date(birthday, today)?;
                let days_until = (date - today).num_days();
                if (0..=i64::from(window_days)).contains(&days_until) {
                    Some(UpcomingBirthday::new(record.name().clone(), date))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Address Book:")?;
        for record in self.records() {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
