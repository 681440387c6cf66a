use tracing::{info, warn};

use crate::domain::{
    book::{
        entities::Book,
        ports::{BookRepository, BookService},
        value_objects::{BookPage, PriceRange},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    sieve::{pagination::PaginationMetadata, value_objects::SieveModel},
};

impl<B, HC> BookService for Service<B, HC>
where
    B: BookRepository,
    HC: HealthCheckRepository,
{
    async fn get_books(&self, model: SieveModel) -> Result<BookPage, CoreError> {
        info!(
            filters = ?model.filters,
            sorts = ?model.sorts,
            "getting books"
        );

        let query = self.sieve.parse::<Book>(&model)?;

        let total_count = self.book_repository.count_books(query.clone()).await?;
        let pagination = PaginationMetadata::new(total_count, query.page_size, query.page);
        let items = self.book_repository.fetch_books(query).await?;

        Ok(BookPage {
            items,
            total_count,
            pagination,
        })
    }

    async fn get_books_advanced(
        &self,
        model: SieveModel,
        price_range: Option<String>,
    ) -> Result<Vec<Book>, CoreError> {
        info!(price_range = ?price_range, "getting books with advanced filters");

        let query = self.sieve.parse::<Book>(&model)?;

        let range = match price_range.as_deref().map(str::parse::<PriceRange>) {
            Some(Ok(range)) => Some(range),
            Some(Err(e)) => {
                warn!("Ignoring price range: {}", e);
                None
            }
            None => None,
        };

        match range {
            Some(range) => {
                self.book_repository
                    .fetch_books_in_price_range(query, range)
                    .await
            }
            None => self.book_repository.fetch_books(query).await,
        }
    }

    async fn get_book(&self, id: i32) -> Result<Book, CoreError> {
        info!(id, "getting book");

        self.book_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
