pub mod book;
pub mod db;
pub mod health;
pub mod sieve;
