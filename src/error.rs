//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by contact and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone, date or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone equal to the given number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// The contact exists but has no birthday
    #[error("No birthday set for {0}")]
    BirthdayNotSet(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading, writing or renaming the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid address book
    #[error("Failed to decode address book {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory book could not be serialized
    #[error("Failed to encode address book: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while turning an input line into a reply.
///
/// Every variant has its own message so the user can tell a typo in the
/// command word apart from a bad phone number or a missing contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line contained no command word
    #[error("Enter a command.")]
    EmptyInput,

    /// The line is not valid UTF-8
    #[error("Could not read that line: it is not valid UTF-8 text.")]
    InvalidEncoding,

    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// The command needs more arguments than were given
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// An argument has the wrong shape for this command
    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },

    /// The command ran but the address book rejected it
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Contact(ContactError::Validation(err))
    }
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
