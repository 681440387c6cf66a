//! HTTP tests for the book and health routes, backed by an in-memory SQLite
//! catalog seeded with the demo books.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use bookshelf_api::{
    application::http::{
        book::validators::INVALID_PRICE_RANGE_MESSAGE,
        server::{app_state::AppState, http_server::router},
    },
    args::Args,
};
use bookshelf_core::{application::create_service_with_connection, domain::common::BookshelfConfig};
use clap::Parser;
use sea_orm::Database;
use serde_json::{Value, json};

async fn create_test_server() -> TestServer {
    let args = Args::parse_from([
        "bookshelf",
        "--server-root-path",
        "/api/v1",
        "--database-seed",
        "true",
        "--sieve-default-page-size",
        "10",
        "--sieve-max-page-size",
        "100",
    ]);
    let config = BookshelfConfig::from(args.clone());

    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open SQLite database");
    let service = create_service_with_connection(db, config)
        .await
        .expect("Failed to create service");

    let app = router(AppState::new(Arc::new(args), service)).expect("Failed to build router");
    TestServer::new(app).expect("Failed to create test server")
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .map(|books| books.iter().filter_map(|b| b["id"].as_i64()).collect())
        .unwrap_or_default()
}

mod list {
    use super::*;

    #[tokio::test]
    async fn test_default_listing() {
        let server = create_test_server().await;

        let response = server.get("/api/v1/books").await;

        response.assert_status_ok();
        assert_eq!(response.header("x-total-count"), "5");

        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("Books retrieved successfully"));
        assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            body["pagination"],
            json!({
                "totalCount": 5,
                "pageSize": 10,
                "currentPage": 1,
                "totalPages": 1,
                "hasPrevious": false,
                "hasNext": false
            })
        );
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_book_shape() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/v1/books")
            .add_query_param("pageSize", 1)
            .await
            .json();

        let book = &body["data"][0];
        assert_eq!(book["title"], json!("The Great Gatsby"));
        assert_eq!(book["price"], json!(12.99));
        assert_eq!(book["isAvailable"], json!(true));
        assert_eq!(book["pageCount"], json!(180));
        assert_eq!(book["publisherId"], json!(1));
        assert_eq!(book["publisher"]["name"], json!("Penguin Random House"));
        assert!(
            book["publishedDate"]
                .as_str()
                .is_some_and(|date| date.starts_with("1925-04-10"))
        );
    }

    #[tokio::test]
    async fn test_filter_and_sort() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("filters", "price>10")
            .add_query_param("sorts", "-price")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("x-total-count"), "4");

        let body: Value = response.json();
        let prices: Vec<f64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|b| b["price"].as_f64())
            .collect();
        assert_eq!(prices, vec![15.99, 14.99, 12.99, 11.99]);
    }

    #[tokio::test]
    async fn test_pagination_metadata() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/v1/books")
            .add_query_param("sorts", "title")
            .add_query_param("page", 2)
            .add_query_param("pageSize", 2)
            .await
            .json();

        assert_eq!(ids(&body), vec![1, 4]);
        assert_eq!(body["pagination"]["totalPages"], json!(3));
        assert_eq!(body["pagination"]["hasPrevious"], json!(true));
        assert_eq!(body["pagination"]["hasNext"], json!(true));
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("page", 4)
            .add_query_param("pageSize", 2)
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("x-total-count"), "5");
        assert!(ids(&response.json()).is_empty());
    }

    #[tokio::test]
    async fn test_largest_page_number_is_empty() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("page", i64::MAX)
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("x-total-count"), "5");
        let body: Value = response.json();
        assert!(ids(&body).is_empty());
        assert_eq!(body["pagination"]["hasNext"], json!(false));
    }

    #[tokio::test]
    async fn test_nested_publisher_filter() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/v1/books")
            .add_query_param("filters", "publisher.country==UK")
            .await
            .json();

        assert_eq!(ids(&body), vec![2, 5]);
    }

    #[tokio::test]
    async fn test_escaped_comma_in_value() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/v1/books")
            .add_query_param("filters", r"publisher.name==Simon & Schuster,genre@=Science\, Fiction")
            .await
            .json();

        assert!(ids(&body).is_empty());
        assert_eq!(body["pagination"]["totalCount"], json!(0));
    }

    #[tokio::test]
    async fn test_unknown_filter_field() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("filters", "isbn==123")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["errors"]["filters"].is_array());
    }

    #[tokio::test]
    async fn test_unknown_sort_field() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("sorts", "-isbn")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["errors"]["sorts"].is_array());
    }

    #[tokio::test]
    async fn test_invalid_filter_value() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("filters", "pageCount>many")
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_page_below_one() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books")
            .add_query_param("page", 0)
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], json!("page must be at least 1"));
        assert!(body["errors"]["page"].is_array());
    }
}

mod advanced {
    use super::*;

    #[tokio::test]
    async fn test_price_range() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books/advanced")
            .add_query_param("priceRange", "10.99-50.99")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec![1, 2, 3, 4]);
        assert!(body.get("pagination").is_none());
    }

    #[tokio::test]
    async fn test_price_range_with_sieve() {
        let server = create_test_server().await;

        let body: Value = server
            .get("/api/v1/books/advanced")
            .add_query_param("priceRange", "10-15")
            .add_query_param("filters", "isAvailable==true")
            .add_query_param("sorts", "-price")
            .await
            .json();

        assert_eq!(ids(&body), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_malformed_price_range() {
        let server = create_test_server().await;

        let response = server
            .get("/api/v1/books/advanced")
            .add_query_param("priceRange", "invalid")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!(INVALID_PRICE_RANGE_MESSAGE));
    }
}

mod single {
    use super::*;

    #[tokio::test]
    async fn test_get_book() {
        let server = create_test_server().await;

        let response = server.get("/api/v1/books/3").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], json!("Book retrieved successfully"));
        assert_eq!(body["data"]["title"], json!("1984"));
        assert_eq!(body["data"]["publisher"]["name"], json!("Simon & Schuster"));
    }

    #[tokio::test]
    async fn test_missing_book() {
        let server = create_test_server().await;

        let response = server.get("/api/v1/books/999").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({ "success": false, "message": "Book with ID 999 not found" })
        );
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let server = create_test_server().await;

        let response = server.get("/api/v1/books/abc").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({ "success": false, "message": "Book with ID abc not found" })
        );
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_live_and_ready() {
        let server = create_test_server().await;

        server.get("/api/v1/health/live").await.assert_status_ok();

        let response = server.get("/api/v1/health/ready").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], json!("up"));
        assert_eq!(body["data"]["database"], json!("sqlite"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = create_test_server().await;

        let response = server.get("/api/v1/api-docs/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"].get("/api/v1/books").is_some());
        assert!(body["paths"].get("/api/v1/books/{id}").is_some());
    }
}
