use crate::application::http::{
    book::validators::GetBooksQuery,
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
    path = "",
    tag = "book",
    summary = "List books",
    description = "Retrieves books filtered, sorted and paginated with sieve query parameters.",
    params(GetBooksQuery),
    responses(
        (status = 200, body = ApiResponse<Vec<Book>>, headers(
            ("X-Total-Count" = u64, description = "Number of books matching the filters")
        )),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<GetBooksQuery>,
) -> Result<Response<ApiResponse<Vec<Book>>>, ApiError> {
    let page = state
        .service
        .get_books(query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Paginated(
        ApiResponse::success(page.items, "Books retrieved successfully")
            .with_pagination(page.pagination),
        page.total_count,
    ))
}
