//! Contact Assistant - a command-line personal contact manager.
//!
//! Keeps contacts (name, phone numbers, optional birthday) between sessions
//! and lists whose birthday is coming up, moving weekend dates to the next
//! Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The name-keyed address book and birthday scheduling
//! - **repositories**: Loading and saving the whole book
//! - **commands**: Command parsing and handlers
//! - **view**: Presentation of replies
//! - **session**: The read-handle-reply loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;
pub mod view;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{Command, Reply};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError, PersistenceError};
pub use models::ContactRecord;
pub use repositories::{BookRepository, FileBookRepository};
pub use session::Session;
pub use view::{ConsoleView, UserView};
