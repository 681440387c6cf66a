use std::future::Future;

use crate::domain::{
    book::{
        entities::Book,
        value_objects::{BookPage, PriceRange},
    },
    common::entities::app_errors::CoreError,
    sieve::value_objects::{SieveModel, SieveQuery},
};

#[cfg_attr(test, mockall::automock)]
pub trait BookRepository: Send + Sync {
    /// Books matching the query, sorted and paginated, with their publisher.
    fn fetch_books(
        &self,
        query: SieveQuery,
    ) -> impl Future<Output = Result<Vec<Book>, CoreError>> + Send;

    /// Size of the filtered set, ignoring sort and pagination.
    fn count_books(&self, query: SieveQuery) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn fetch_books_in_price_range(
        &self,
        query: SieveQuery,
        range: PriceRange,
    ) -> impl Future<Output = Result<Vec<Book>, CoreError>> + Send;

    fn get_by_id(&self, id: i32) -> impl Future<Output = Result<Option<Book>, CoreError>> + Send;
}

pub trait BookService: Send + Sync {
    fn get_books(
        &self,
        model: SieveModel,
    ) -> impl Future<Output = Result<BookPage, CoreError>> + Send;

    /// Like [`BookService::get_books`] with an extra inclusive price range.
    /// A range that does not parse is ignored.
    fn get_books_advanced(
        &self,
        model: SieveModel,
        price_range: Option<String>,
    ) -> impl Future<Output = Result<Vec<Book>, CoreError>> + Send;

    fn get_book(&self, id: i32) -> impl Future<Output = Result<Book, CoreError>> + Send;
}
