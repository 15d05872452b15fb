//! Book endpoints

use reqwest::Method;

use crate::{
    error::ClientResult,
    models::{
        book::{Book, BookUpdate, CreateBookPayload, NewBook},
        pagination::{ListQuery, PaginatedResponse},
    },
};

use super::{ids::generate_book_id, ApiResponse, LibraryService};

impl LibraryService {
    /// `GET /books?page=..&size=..[&search=..]`
    pub async fn list_books(&self, query: &ListQuery) -> ClientResult<ApiResponse<PaginatedResponse<Book>>> {
        let request = self.request(Method::GET, &["books"])?.query(query);
        self.fetch(request).await
    }

    /// `GET /books/{id}`
    pub async fn get_book(&self, id: &str) -> ClientResult<ApiResponse<Book>> {
        let request = self.request(Method::GET, &["books", id])?;
        self.fetch(request).await
    }

    /// `PUT /books`, with the id chosen by the configured [`crate::config::BookIdStrategy`].
    ///
    /// `data` is `None` when the backend answers without a body.
    pub async fn create_book(&self, book: &NewBook) -> ClientResult<ApiResponse<Option<Book>>> {
        let payload = CreateBookPayload {
            id: generate_book_id(self.book_ids),
            book,
        };
        if let Some(id) = &payload.id {
            tracing::debug!(book_id = %id, "Generated book id");
        }

        let request = self.request(Method::PUT, &["books"])?.json(&payload);
        self.fetch_optional(request).await
    }

    /// `PATCH /books/{id}`
    pub async fn update_book(&self, id: &str, update: &BookUpdate) -> ClientResult<ApiResponse<Option<Book>>> {
        let request = self.request(Method::PATCH, &["books", id])?.json(update);
        self.fetch_optional(request).await
    }

    /// `DELETE /books/{id}`
    pub async fn delete_book(&self, id: &str) -> ClientResult<ApiResponse<()>> {
        let request = self.request(Method::DELETE, &["books", id])?;
        self.fetch_empty(request).await
    }
}
