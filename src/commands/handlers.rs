//! Command handlers.
//!
//! Each handler applies one command to the address book and returns a
//! [`Reply`]. Validation runs before any mutation, so a failed command
//! leaves the book as it was.

use super::{Command, Reply};
use crate::book::AddressBook;
use crate::error::{CommandResult, ContactError};
use crate::models::ContactRecord;
use chrono::NaiveDate;

/// Values a handler needs beyond the book itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// The date birthdays are scheduled from
    pub today: NaiveDate,

    /// Window for `birthdays` without an explicit day count
    pub window_days: u32,
}

/// Run `command` against `book`.
///
/// `Command::Exit` leaves the book untouched and answers `Reply::Exit`;
/// saving is up to the caller.
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<Reply> {
    match command {
        Command::Hello => Ok(Reply::message("How can I help you?")),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_contact(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, date } => add_birthday(book, &name, &date),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays { days } => Ok(birthdays(
            book,
            days.unwrap_or(ctx.window_days),
            ctx.today,
        )),
        Command::Delete { name } => delete_contact(book, &name),
        Command::Exit => Ok(Reply::Exit),
    }
}

/// Append `phone` to an existing contact, or create the contact with it.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<Reply> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Reply::message("Contact updated."));
    }

    let mut record = ContactRecord::with_name(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Reply::message("Contact added."))
}

pub fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<Reply> {
    let record = find_mut(book, name)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok(Reply::message("Contact updated."))
}

pub fn show_phone(book: &AddressBook, name: &str) -> CommandResult<Reply> {
    Ok(Reply::Contact(find(book, name)?.clone()))
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<Reply> {
    let record = find_mut(book, name)?;
    if !record.remove_phone(phone) {
        return Err(ContactError::PhoneNotFound(phone.to_string()).into());
    }
    Ok(Reply::message("Phone removed."))
}

pub fn show_all(book: &AddressBook) -> Reply {
    Reply::Contacts(book.records().cloned().collect())
}

pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<Reply> {
    let record = find_mut(book, name)?;
    record.set_birthday(date)?;
    Ok(Reply::message("Birthday added."))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<Reply> {
    let record = find(book, name)?;
    let birthday = record
        .birthday()
        .ok_or_else(|| ContactError::BirthdayNotSet(name.to_string()))?;
    Ok(Reply::Birthday(*birthday))
}

pub fn birthdays(book: &AddressBook, window_days: u32, today: NaiveDate) -> Reply {
    Reply::UpcomingBirthdays(book.upcoming_birthdays(window_days, today))
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<Reply> {
    if !book.delete(name) {
        return Err(ContactError::ContactNotFound(name.to_string()).into());
    }
    Ok(Reply::message("Contact deleted."))
}

fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a ContactRecord, ContactError> {
    book.find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
}

fn find_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> Result<&'a mut ContactRecord, ContactError> {
    book.find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
}
