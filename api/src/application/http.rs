pub mod book;
pub mod health;
pub mod query_extractor;
pub mod server;
