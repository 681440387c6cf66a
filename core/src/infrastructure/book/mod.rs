pub mod columns;
pub mod mappers;
pub mod repositories;

pub use repositories::book_repository::PostgresBookRepository;
