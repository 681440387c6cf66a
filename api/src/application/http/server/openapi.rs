use crate::application::http::{book::router::BookApiDoc, health::router::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "Book catalog with sieve filtering, sorting and pagination"
    ),
    nest(
        (path = "/books", api = BookApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
