use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::{ApiResponse, Response},
    },
    app_state::AppState,
};
use axum::extract::{Path, State};
use bookshelf_core::domain::{
    book::{entities::Book, ports::BookService},
    common::entities::app_errors::CoreError,
};

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "book",
    summary = "Get book",
    description = "Retrieves one book with its publisher.",
    params(
        ("id" = i32, Path, description = "Book ID"),
    ),
    responses(
        (status = 200, body = ApiResponse<Book>),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_book(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ApiResponse<Book>>, ApiError> {
    // Ids that are not integers cannot match any book.
    let id: i32 = raw_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Book with ID {} not found", raw_id)))?;

    let book = state.service.get_book(id).await.map_err(|e| match e {
        CoreError::NotFound => ApiError::NotFound(format!("Book with ID {} not found", id)),
        e => ApiError::from(e),
    })?;

    Ok(Response::OK(ApiResponse::success(
        book,
        "Book retrieved successfully",
    )))
}
