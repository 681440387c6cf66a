use std::sync::Arc;

use crate::domain::{
    book::ports::BookRepository, health::ports::HealthCheckRepository,
    sieve::services::SieveProcessor,
};

#[derive(Clone)]
pub struct Service<B, HC>
where
    B: BookRepository,
    HC: HealthCheckRepository,
{
    pub book_repository: Arc<B>,
    pub health_check_repository: Arc<HC>,
    pub sieve: Arc<SieveProcessor>,
}

impl<B, HC> Service<B, HC>
where
    B: BookRepository,
    HC: HealthCheckRepository,
{
    pub fn new(book_repository: B, health_check_repository: HC, sieve: SieveProcessor) -> Self {
        Self {
            book_repository: Arc::new(book_repository),
            health_check_repository: Arc::new(health_check_repository),
            sieve: Arc::new(sieve),
        }
    }
}
