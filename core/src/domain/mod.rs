pub mod book;
pub mod common;
pub mod health;
pub mod sieve;
