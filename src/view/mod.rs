//! Presentation of replies to the user.
//!
//! The session only talks to [`UserView`]; [`ConsoleView`] is the terminal
//! implementation and works over any [`std::io::Write`].

mod console;

pub use console::ConsoleView;

use crate::book::UpcomingBirthday;
use crate::commands::Reply;
use crate::domain::BirthdayDate;
use crate::error::CommandError;
use crate::models::ContactRecord;
use std::io;

/// A place replies are shown.
pub trait UserView {
    /// Ask for the next command.
    fn show_prompt(&mut self) -> io::Result<()>;

    fn show_message(&mut self, message: &str) -> io::Result<()>;

    fn show_contact(&mut self, contact: &ContactRecord) -> io::Result<()>;

    fn show_all_contacts(&mut self, contacts: &[ContactRecord]) -> io::Result<()>;

    fn show_birthday(&mut self, birthday: &BirthdayDate) -> io::Result<()>;

    fn show_upcoming_birthdays(&mut self, birthdays: &[UpcomingBirthday]) -> io::Result<()>;

    /// Report a failed command.
    fn show_error(&mut self, error: &CommandError) -> io::Result<()> {
        self.show_message(&error.to_string())
    }

    /// Show whatever a handler returned.
    fn render(&mut self, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::Message(message) => self.show_message(message),
            Reply::Contact(contact) => self.show_contact(contact),
            Reply::Contacts(contacts) => self.show_all_contacts(contacts),
            Reply::Birthday(birthday) => self.show_birthday(birthday),
            Reply::UpcomingBirthdays(birthdays) => self.show_upcoming_birthdays(birthdays),
            Reply::Exit => self.show_message("Good bye!"),
        }
    }
}
