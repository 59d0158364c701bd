//! Data model for a stored contact.

pub mod record;

pub use record::ContactRecord;
