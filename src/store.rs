use std::error::Error;
use std::fmt;
use std::sync::{Arc, RwLock};

use rand::Rng;

use crate::models::{Book, NewBook};
use crate::repo::BookRepo;

/// Ids are drawn at random from this range, mirroring the scale the service
/// is designed for.
const ID_RANGE: std::ops::RangeInclusive<i32> = 1..=1_000_000;

/// Attempts before giving up on finding an unused id. At the target scale
/// collisions are rare, so hitting this limit means the id space is
/// effectively full.
const MAX_ID_ATTEMPTS: usize = 100;

#[derive(Debug)]
pub enum StoreError {
    LockPoisoned,
    IdSpaceExhausted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned => {
                write!(f, "book collection lock was poisoned by a panicking writer")
            }
            StoreError::IdSpaceExhausted => {
                write!(f, "could not find an unused book ID after {MAX_ID_ATTEMPTS} attempts")
            }
        }
    }
}

impl Error for StoreError {}

/// Thread-safe in-memory book collection.
///
/// A single reader/writer lock guards the whole collection: reads share it,
/// writes take it exclusively, so no caller ever observes a half-applied
/// mutation. Cloning the repo clones the handle, not the collection, so all
/// clones operate on the same books. Every returned `Book` is an independent
/// copy of store state.
#[derive(Clone, Default)]
pub struct MemoryBookRepo {
    books: Arc<RwLock<Vec<Book>>>,
}

impl MemoryBookRepo {
    pub fn new() -> Self {
        MemoryBookRepo::default()
    }
}

fn fresh_id(books: &[Book]) -> Result<i32, StoreError> {
    let mut rng = rand::thread_rng();
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = rng.gen_range(ID_RANGE);
        if !books.iter().any(|book| book.id == id) {
            return Ok(id);
        }
    }
    Err(StoreError::IdSpaceExhausted)
}

impl BookRepo<StoreError> for MemoryBookRepo {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let books = self.books.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(books.clone())
    }

    async fn get_book(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let books = self.books.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn insert_book(&mut self, new_book: NewBook) -> Result<Book, StoreError> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;

        let book = Book {
            id: fresh_id(&books)?,
            title: new_book.title,
            author: new_book.author,
        };
        books.push(book.clone());

        Ok(book)
    }

    async fn update_book(
        &mut self,
        id: i32,
        new_book: NewBook,
    ) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;

        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.title = new_book.title;
                book.author = new_book.author;
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_book(&mut self, id: i32) -> Result<bool, StoreError> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;

        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                // Vec::remove shifts the tail left, keeping insertion order
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
