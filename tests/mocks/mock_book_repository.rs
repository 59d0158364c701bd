use async_trait::async_trait;
use contact_assistant::error::{PersistenceError, PersistenceResult};
use contact_assistant::repositories::BookRepository;
use contact_assistant::AddressBook;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the "stored" book in memory and tracks method calls for
/// verification. Saves can be made to fail to exercise error paths.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: bool,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository that has never been saved to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every `save` fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The most recently saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn load(&self) -> PersistenceResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    async fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        self.track_call("save");
        if self.fail_saves {
            return Err(PersistenceError::Io {
                path: "mock.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
