use crate::book::UpcomingBirthday;
use crate::domain::BirthdayDate;
use crate::models::ContactRecord;

/// What a handled command hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A one-line confirmation
    Message(String),

    /// A single contact (`phone`)
    Contact(ContactRecord),

    /// Every contact in book order (`all`)
    Contacts(Vec<ContactRecord>),

    /// One contact's birthday (`show-birthday`)
    Birthday(BirthdayDate),

    /// Contacts to congratulate soon (`birthdays`)
    UpcomingBirthdays(Vec<UpcomingBirthday>),

    /// The session should save and stop (`close`, `exit`)
    Exit,
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}
