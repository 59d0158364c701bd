//! ContactRecord: one contact's name, phones and optional birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at creation and acts as the key in
/// [`AddressBook`](crate::book::AddressBook). Phones keep insertion order and
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a contact from a raw name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> Result<&PhoneNumber, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Remove the first phone equal to `number`.
    ///
    /// Returns whether a phone was removed; an absent number is not an error.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p == number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// `new` is validated before the list is touched, so on any error the
    /// phones are unchanged.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if `new` is not a valid phone number
    /// - `ContactError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> ContactResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| **p == *old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(BirthdayDate::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "; birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::with_name("Anna").unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ContactRecord::with_name("Anna").unwrap();
        assert_eq!(record.name().as_str(), "Anna");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_preserves_order_and_duplicates() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_list_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhoneFormat("12345".into()));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        assert!(record.remove_phone("1111111111"));
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_missing_phone_reports_false() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(!record.remove_phone("9999999999"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_missing_phone_fails_without_mutation() {
        let mut record = record_with_phones(&["1111111111"]);
        let before = record.clone();
        let err = record.edit_phone("9999999999", "3333333333").unwrap_err();
        assert_eq!(err, ContactError::PhoneNotFound("9999999999".into()));
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_phone_validates_new_number_first() {
        let mut record = record_with_phones(&["1111111111"]);
        let before = record.clone();
        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, ContactError::Validation(_)));
        assert_eq!(record, before);

        // Invalid replacement wins even when the old number is also missing.
        let err = record.edit_phone("9999999999", "abc").unwrap_err();
        assert!(matches!(err, ContactError::Validation(_)));
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = ContactRecord::with_name("Anna").unwrap();
        record.set_birthday("12.05.1990").unwrap();
        record.set_birthday("13.06.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "13.06.1991");
    }

    #[test]
    fn test_invalid_birthday_keeps_previous() {
        let mut record = ContactRecord::with_name("Anna").unwrap();
        record.set_birthday("12.05.1990").unwrap();
        assert!(record.set_birthday("1990-05-12").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "12.05.1990");
    }

    #[test]
    fn test_display() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(record.to_string(), "Anna: 1111111111; 2222222222");

        record.set_birthday("12.05.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Anna: 1111111111; 2222222222; birthday: 12.05.1990"
        );

        let bare = ContactRecord::with_name("Bob").unwrap();
        assert_eq!(bare.to_string(), "Bob: ");
    }

    #[test]
    fn test_serde_shape() {
        let mut record = record_with_phones(&["1111111111"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Anna", "phones": ["1111111111"] })
        );

        record.set_birthday("12.05.1990").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_rejects_invalid_phone() {
        let result: Result<ContactRecord, _> =
            serde_json::from_str(r#"{ "name": "Anna", "phones": ["12"] }"#);
        assert!(result.is_err());
    }
}
