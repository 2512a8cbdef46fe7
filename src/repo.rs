use crate::models::{Book, NewBook};
use std::error::Error;
use std::future::Future;

/// Data-access contract for the book collection. `E` is the implementation's
/// own failure type; "no such book" is not a failure and is reported through
/// `Option` / `bool` instead.
pub trait BookRepo<E: Error> {
    /// Returns a snapshot of all books in insertion order.
    fn list_books(&self) -> impl Future<Output = Result<Vec<Book>, E>> + Send;

    fn get_book(&self, id: i32) -> impl Future<Output = Result<Option<Book>, E>> + Send;

    /// Assigns a fresh id and appends the book, returning the stored copy.
    fn insert_book(&mut self, new_book: NewBook) -> impl Future<Output = Result<Book, E>> + Send;

    /// Replaces title/author in place; the id is preserved.
    fn update_book(
        &mut self,
        id: i32,
        new_book: NewBook,
    ) -> impl Future<Output = Result<Option<Book>, E>> + Send;

    /// Returns true if the book existed and was deleted, false otherwise
    fn delete_book(&mut self, id: i32) -> impl Future<Output = Result<bool, E>> + Send;
}
