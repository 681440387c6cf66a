use crate::application::http::{
    book::validators::GetBooksAdvancedQuery,
    query_extractor::ValidateQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::{ApiResponse, Response},
        },
        app_state::AppState,
    },
};
use axum::extract::State;
use bookshelf_core::domain::book::{entities::Book, ports::BookService};

#[utoipa::path(
    get,
    path = "/advanced",
    tag = "book",
    summary = "Search books by price range",
    description = "Same sieve parameters as the book list, plus an inclusive `priceRange` (min-max). Not paginated in the envelope.",
    params(GetBooksAdvancedQuery),
    responses(
        (status = 200, body = ApiResponse<Vec<Book>>),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn get_books_advanced(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<GetBooksAdvancedQuery>,
) -> Result<Response<ApiResponse<Vec<Book>>>, ApiError> {
    let (model, price_range) = query.into_parts();

    let books = state
        .service
        .get_books_advanced(model, price_range)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiResponse::success(
        books,
        "Books retrieved successfully",
    )))
}
