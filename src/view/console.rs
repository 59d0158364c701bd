use super::UserView;
use crate::book::UpcomingBirthday;
use crate::domain::BirthdayDate;
use crate::models::ContactRecord;
use std::io::{self, Write};

const PROMPT: &str = "Enter a command: ";

/// Plain-text view for a terminal or any other writer.
#[derive(Debug)]
pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UserView for ConsoleView<W> {
    fn show_prompt(&mut self) -> io::Result<()> {
        self.out.write_all(PROMPT.as_bytes())?;
        self.out.flush()
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    fn show_contact(&mut self, contact: &ContactRecord) -> io::Result<()> {
        writeln!(self.out, "{}", contact)
    }

    fn show_all_contacts(&mut self, contacts: &[ContactRecord]) -> io::Result<()> {
        if contacts.is_empty() {
            return self.show_message("No contacts available.");
        }
        for contact in contacts {
            self.show_contact(contact)?;
        }
        Ok(())
    }

    fn show_birthday(&mut self, birthday: &BirthdayDate) -> io::Result<()> {
        writeln!(self.out, "Birthday: {}", birthday)
    }

    fn show_upcoming_birthdays(&mut self, birthdays: &[UpcomingBirthday]) -> io::Result<()> {
        if birthdays.is_empty() {
            return self.show_message("No upcoming birthdays.");
        }
        for birthday in birthdays {
            writeln!(self.out, "{}", birthday)?;
        }
        Ok(())
    }
}
