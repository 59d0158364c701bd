mod file_book_repository;
mod traits;

pub use file_book_repository::{FileBookRepository, BOOK_FILE_VERSION, DEFAULT_BOOK_PATH};
pub use traits::BookRepository;
