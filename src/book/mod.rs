//! The name-keyed contact store and its birthday queries.

mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{congratulation_date, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
