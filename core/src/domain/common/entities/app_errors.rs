use thiserror::Error;

use crate::domain::sieve::entities::errors::SieveError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error(transparent)]
    Sieve(#[from] SieveError),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl CoreError {
    /// Whether the error was caused by the caller's input rather than by the server.
    pub fn is_client_error(&self) -> bool {
        match self {
            CoreError::NotFound => true,
            CoreError::Sieve(e) => e.is_client_error(),
            CoreError::InternalServerError | CoreError::ServiceUnavailable(_) => false,
        }
    }
}
