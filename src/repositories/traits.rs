use crate::book::AddressBook;
use crate::error::PersistenceResult;
use async_trait::async_trait;

/// Durable storage for the whole address book.
///
/// The book is read once when a session starts and written once when it
/// ends, so implementations deal in complete snapshots rather than
/// per-record updates.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Load the stored book.
    ///
    /// A store that has never been written yields an empty book; any other
    /// failure is an error.
    async fn load(&self) -> PersistenceResult<AddressBook>;

    /// Replace the stored book with `book`.
    ///
    /// After a failed save the previous snapshot must still be loadable.
    async fn save(&self, book: &AddressBook) -> PersistenceResult<()>;
}
