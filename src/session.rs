//! Interactive session: load the book, answer commands, save on exit.
//!
//! The book is read once when the session starts and written once when it
//! ends. Commands are handled one at a time; nothing touches the file in
//! between, so changes made before an abnormal termination are lost.

use crate::book::AddressBook;
use crate::commands::{self, Command, CommandContext, Reply};
use crate::error::{CommandError, PersistenceResult};
use crate::repositories::BookRepository;
use crate::view::UserView;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const WELCOME: &str = "Welcome to the assistant bot!";

/// One user's conversation with the assistant.
pub struct Session<V: UserView> {
    book: AddressBook,
    repo: Arc<dyn BookRepository>,
    view: V,
    window_days: u32,
    today: Option<NaiveDate>,
}

impl<V: UserView> Session<V> {
    /// Load the stored book and prepare a session around it.
    ///
    /// # Errors
    ///
    /// Fails if the stored book exists but cannot be read or decoded.
    pub async fn start(
        repo: Arc<dyn BookRepository>,
        view: V,
        window_days: u32,
    ) -> PersistenceResult<Self> {
        let book = repo.load().await?;
        tracing::info!("Session started with {} contacts", book.len());
        Ok(Self {
            book,
            repo,
            view,
            window_days,
            today: None,
        })
    }

    /// Schedule birthdays from a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn context(&self) -> CommandContext {
        CommandContext {
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
            window_days: self.window_days,
        }
    }

    /// Read commands from `input` until `close`/`exit` or end of input,
    /// then save the book.
    ///
    /// The save is attempted on every way out of the loop, including a
    /// failed read or a failed write to the view.
    ///
    /// # Errors
    ///
    /// Fails if reading input, writing to the view, or saving fails. A
    /// read or write failure is returned in preference to a save failure.
    /// Command failures are shown to the user and do not end the session.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let outcome = self.read_commands(input).await;
        if let Err(e) = &outcome {
            tracing::error!("Session ended early: {}", e);
        }

        let saved = self.repo.save(&self.book).await;
        match &saved {
            Ok(()) => tracing::info!("Saved {} contacts", self.book.len()),
            Err(e) => tracing::error!("Failed to save address book: {}", e),
        }

        outcome?;
        saved?;
        self.view.render(&Reply::Exit)?;
        Ok(())
    }

    async fn read_commands<R>(&mut self, mut input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.view.show_message(WELCOME)?;
        let mut buf = Vec::new();

        loop {
            self.view.show_prompt()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                tracing::info!("End of input, closing session");
                return Ok(());
            }
            strip_line_ending(&mut buf);

            let parsed = std::str::from_utf8(&buf)
                .map_err(|_| CommandError::InvalidEncoding)
                .and_then(str::parse::<Command>);
            let command = match parsed {
                Ok(command) => command,
                Err(CommandError::EmptyInput) => continue,
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", String::from_utf8_lossy(&buf), e);
                    self.view.show_error(&e)?;
                    continue;
                }
            };

            tracing::debug!("Handling {:?}", command);
            let ctx = self.context();
            match commands::execute(command, &mut self.book, &ctx) {
                Ok(Reply::Exit) => return Ok(()),
                Ok(reply) => self.view.render(&reply)?,
                Err(e) => {
                    tracing::debug!("Command failed: {}", e);
                    self.view.show_error(&e)?;
                }
            }
        }
    }
}

fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
