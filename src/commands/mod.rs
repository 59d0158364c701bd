//! Command parsing and handling.
//!
//! A line of input becomes a [`Command`], a command is applied to the
//! address book by [`handlers::execute`], and the outcome comes back as a
//! [`Reply`] for a [`UserView`](crate::view::UserView) to present.

pub mod handlers;
mod parser;
mod reply;

pub use handlers::{execute, CommandContext};
pub use parser::Command;
pub use reply::Reply;
