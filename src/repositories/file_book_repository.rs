use crate::book::AddressBook;
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::ContactRecord;
use crate::repositories::traits::BookRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// File name used when no path is configured, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Format version written into every book file.
pub const BOOK_FILE_VERSION: &str = "1.0";

#[derive(Debug, Deserialize)]
struct BookFile {
    version: String,
    #[serde(default)]
    records: Vec<ContactRecord>,
}

#[derive(Debug, Serialize)]
struct BookFileRef<'a> {
    version: &'a str,
    records: Vec<&'a ContactRecord>,
}

/// Address book stored as a single JSON file.
///
/// ```json
/// {
///   "version": "1.0",
///   "records": [
///     { "name": "Anna", "phones": ["0501234567"], "birthday": "12.05.1990" }
///   ]
/// }
/// ```
///
/// Saves write a sibling `.tmp` file and rename it over the target, so a
/// reader sees either the old book or the new one in full.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> PersistenceResult<()> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| PersistenceError::io(temp_path, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| PersistenceError::io(temp_path, e))?;
        file.flush()
            .await
            .map_err(|e| PersistenceError::io(temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| PersistenceError::io(temp_path, e))?;
        Ok(())
    }
}

impl Default for FileBookRepository {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_PATH)
    }
}

#[async_trait]
impl BookRepository for FileBookRepository {
    async fn load(&self) -> PersistenceResult<AddressBook> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(PersistenceError::io(&self.path, e)),
        };

        let file: BookFile =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Decode {
                path: self.path.clone(),
                source,
            })?;

        if file.version != BOOK_FILE_VERSION {
            tracing::warn!(
                "Address book version mismatch: expected {}, got {}. Loading anyway.",
                BOOK_FILE_VERSION,
                file.version
            );
        }

        let book: AddressBook = file.records.into_iter().collect();
        tracing::debug!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    async fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        let file = BookFileRef {
            version: BOOK_FILE_VERSION,
            records: book.records().collect(),
        };
        let json = serde_json::to_vec_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| PersistenceError::io(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, &json).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(PersistenceError::io(&self.path, e));
        }

        tracing::debug!(
            "Saved {} contacts to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}
