//! Service tests against an in-process mock backend

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use regex::Regex;
use serde_json::{json, Value};

use library_client::{
    config::BookIdStrategy,
    models::{BookUpdate, ListQuery, NewBook, NewCheckout},
    ClientError, LibraryService,
};

/// A request as seen by the backend
#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    uri: String,
    body: String,
}

#[derive(Clone)]
struct Backend {
    status: StatusCode,
    response: Value,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Backend {
    fn last(&self) -> Recorded {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("No request reached the backend")
    }

    fn last_json(&self) -> Value {
        serde_json::from_str(&self.last().body).expect("Request body is not JSON")
    }
}

async fn record(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    backend.requests.lock().unwrap().push(Recorded {
        method,
        uri: uri.to_string(),
        body,
    });
    if backend.status == StatusCode::NO_CONTENT {
        return StatusCode::NO_CONTENT.into_response();
    }
    (backend.status, Json(backend.response.clone())).into_response()
}

/// Start a backend answering every request with `status` and `response`
async fn spawn_backend(status: StatusCode, response: Value) -> (LibraryService, Backend) {
    let backend = Backend {
        status,
        response,
        requests: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new().fallback(record).with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let service = LibraryService::with_base_url(format!("http://{}", addr)).unwrap();
    (service, backend)
}

fn book_json() -> Value {
    json!({
        "id": "B-1700000000000123",
        "title": "The Hobbit",
        "author": "J.R.R. Tolkien",
        "availableCopies": 2
    })
}

fn checkout_json() -> Value {
    json!({
        "id": "C-1",
        "studentName": "Ada Lovelace",
        "bookId": "B-1700000000000123",
        "checkoutDate": "2024-03-01T10:00:00Z"
    })
}

fn page_of(item: Value, current_page: u32) -> Value {
    json!({
        "data": [item],
        "pagination": { "totalItems": 11, "currentPage": current_page, "totalPages": 3, "pageSize": 5 }
    })
}

#[tokio::test]
async fn test_list_books_forwards_page_size_and_search() {
    let (service, backend) = spawn_backend(StatusCode::OK, page_of(book_json(), 2)).await;

    let response = service
        .list_books(&ListQuery::page(2, 5).search("tolkien"))
        .await
        .unwrap();

    let request = backend.last();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.uri, "/books?page=2&size=5&search=tolkien");

    assert_eq!(response.status, StatusCode::OK);
    let page = response.into_data();
    assert_eq!(page.data[0].title, "The Hobbit");
    assert_eq!(page.pagination.current_page, 2);
    assert!(page.has_next_page());
}

#[tokio::test]
async fn test_list_books_defaults_and_blank_search() {
    let (service, backend) = spawn_backend(StatusCode::OK, page_of(book_json(), 1)).await;

    service.list_books(&ListQuery::default()).await.unwrap();
    assert_eq!(backend.last().uri, "/books?page=1&size=10");

    service.list_books(&ListQuery::default().search("")).await.unwrap();
    assert_eq!(backend.last().uri, "/books?page=1&size=10");
}

#[tokio::test]
async fn test_get_book() {
    let (service, backend) = spawn_backend(StatusCode::OK, book_json()).await;

    let book = service.get_book("42").await.unwrap().into_data();

    let request = backend.last();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.uri, "/books/42");
    assert_eq!(book.available_copies, 2);
}

#[tokio::test]
async fn test_create_book_sends_generated_id() {
    let (service, backend) = spawn_backend(StatusCode::OK, book_json()).await;

    service
        .create_book(&NewBook::new("The Hobbit", "J.R.R. Tolkien", 2))
        .await
        .unwrap();

    let request = backend.last();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.uri, "/books");

    let body = backend.last_json();
    let id = body["id"].as_str().unwrap();
    assert!(Regex::new(r"^B-\d+\d{3}$").unwrap().is_match(id), "unexpected id {}", id);
    assert_eq!(body["title"], "The Hobbit");
    assert_eq!(body["author"], "J.R.R. Tolkien");
    assert_eq!(body["availableCopies"], 2);
}

#[tokio::test]
async fn test_create_book_leaves_id_to_server() {
    let (service, backend) = spawn_backend(StatusCode::OK, book_json()).await;
    let service = service.with_book_ids(BookIdStrategy::Server);

    service
        .create_book(&NewBook::new("Dune", "Frank Herbert", 1))
        .await
        .unwrap();

    assert!(backend.last_json().get("id").is_none());
}

#[tokio::test]
async fn test_update_book_sends_only_changed_fields() {
    let (service, backend) = spawn_backend(StatusCode::OK, book_json()).await;

    service
        .update_book("42", &BookUpdate::default().available_copies(5))
        .await
        .unwrap();

    let request = backend.last();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.uri, "/books/42");
    assert_eq!(backend.last_json(), json!({ "availableCopies": 5 }));
}

#[tokio::test]
async fn test_delete_book() {
    let (service, backend) = spawn_backend(StatusCode::OK, Value::Null).await;

    let response = service.delete_book("42").await.unwrap();

    let request = backend.last();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.uri, "/books/42");
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_checkouts() {
    let (service, backend) = spawn_backend(StatusCode::OK, page_of(checkout_json(), 1)).await;

    let page = service
        .list_checkouts(&ListQuery::page(1, 5).search("ada"))
        .await
        .unwrap()
        .into_data();

    assert_eq!(backend.last().uri, "/checkouts?page=1&size=5&search=ada");
    assert!(page.data[0].is_active());
}

#[tokio::test]
async fn test_get_checkout_history() {
    let (service, backend) = spawn_backend(StatusCode::OK, page_of(checkout_json(), 1)).await;

    let history = service.get_checkout_history("b1").await.unwrap().into_data();

    let request = backend.last();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.uri, "/checkouts/book/b1");
    assert_eq!(history.data[0].student_name, "Ada Lovelace");
}

#[tokio::test]
async fn test_create_checkout_omits_server_fields() {
    let (service, backend) = spawn_backend(StatusCode::OK, checkout_json()).await;

    let checkout = service
        .create_checkout(&NewCheckout::new("Ada Lovelace", "B-1700000000000123"))
        .await
        .unwrap()
        .into_data()
        .expect("Backend returned the checkout");

    let request = backend.last();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.uri, "/checkouts");

    let body = backend.last_json();
    assert!(body.get("id").is_none());
    assert!(body.get("checkoutDate").is_none());
    assert_eq!(body["studentName"], "Ada Lovelace");
    assert_eq!(body["bookId"], "B-1700000000000123");
    assert_eq!(checkout.id, "C-1");
}

#[tokio::test]
async fn test_return_book_patches_without_body() {
    let mut returned = checkout_json();
    returned["returnDate"] = json!("2024-03-08T09:30:00Z");
    let (service, backend) = spawn_backend(StatusCode::OK, returned).await;

    let checkout = service
        .return_book("C-1")
        .await
        .unwrap()
        .into_data()
        .expect("Backend returned the checkout");

    let request = backend.last();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.uri, "/checkouts/C-1");
    assert!(request.body.is_empty());
    assert!(!checkout.is_active());
}

#[tokio::test]
async fn test_mutations_accept_no_content() {
    let (service, backend) = spawn_backend(StatusCode::NO_CONTENT, Value::Null).await;

    let returned = service.return_book("C-1").await.unwrap();
    assert_eq!(returned.status, StatusCode::NO_CONTENT);
    assert!(returned.data.is_none());
    assert_eq!(backend.last().uri, "/checkouts/C-1");

    let updated = service
        .update_book("42", &BookUpdate::default().title("The Hobbit"))
        .await
        .unwrap();
    assert!(updated.data.is_none());

    let created = service
        .create_book(&NewBook::new("Dune", "Frank Herbert", 1))
        .await
        .unwrap();
    assert!(created.data.is_none());

    let lent = service
        .create_checkout(&NewCheckout::new("Ada Lovelace", "B-1"))
        .await
        .unwrap();
    assert!(lent.data.is_none());
}

#[tokio::test]
async fn test_reads_still_require_a_body() {
    let (service, _backend) = spawn_backend(StatusCode::NO_CONTENT, Value::Null).await;

    let err = service.get_book("42").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (service, backend) = spawn_backend(
        StatusCode::OK,
        json!({ "totalBooks": 120, "availableBooks": 97, "totalCheckouts": 340, "activeCheckouts": 23 }),
    )
    .await;

    let stats = service.get_dashboard_stats().await.unwrap().into_data();

    let request = backend.last();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.uri, "/dashboard");
    assert_eq!(stats.total_books, 120);
    assert_eq!(stats.available_books, 97);
    assert_eq!(stats.total_checkouts, 340);
    assert_eq!(stats.active_checkouts, 23);
}

#[tokio::test]
async fn test_error_status_is_propagated() {
    let (service, _backend) =
        spawn_backend(StatusCode::NOT_FOUND, json!({ "message": "Book not found" })).await;

    let err = service.get_book("missing").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::Status { status, url, body } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(url.ends_with("/books/missing"));
            assert!(body.contains("Book not found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_a_decode_error() {
    let (service, _backend) = spawn_backend(StatusCode::OK, json!({ "unexpected": true })).await;

    let err = service.get_dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = LibraryService::with_base_url(format!("http://{}", addr)).unwrap();
    let err = service.get_dashboard_stats().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}
