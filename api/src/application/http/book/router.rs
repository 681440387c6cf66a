use super::handlers::get_book::{__path_get_book, get_book};
use super::handlers::get_books::{__path_get_books, get_books};
use super::handlers::get_books_advanced::{__path_get_books_advanced, get_books_advanced};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_books, get_books_advanced, get_book))]
pub struct BookApiDoc;

pub fn book_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/books", state.args.server.root_path),
            get(get_books),
        )
        .route(
            &format!("{}/books/advanced", state.args.server.root_path),
            get(get_books_advanced),
        )
        .route(
            &format!("{}/books/{{id}}", state.args.server.root_path),
            get(get_book),
        )
}
