//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields a contact is made of. Each one is
//! validated at construction time, so a value that exists is a value
//! that satisfies its format.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{BirthdayDate, DATE_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
