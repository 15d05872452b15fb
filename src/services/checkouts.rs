//! Checkout endpoints

use reqwest::Method;

use crate::{
    error::ClientResult,
    models::{
        checkout::{Checkout, NewCheckout},
        pagination::{ListQuery, PaginatedResponse},
    },
};

use super::{ApiResponse, LibraryService};

impl LibraryService {
    /// `GET /checkouts?page=..&size=..[&search=..]`
    pub async fn list_checkouts(&self, query: &ListQuery) -> ClientResult<ApiResponse<PaginatedResponse<Checkout>>> {
        let request = self.request(Method::GET, &["checkouts"])?.query(query);
        self.fetch(request).await
    }

    /// Every checkout of one book, `GET /checkouts/book/{bookId}`
    pub async fn get_checkout_history(&self, book_id: &str) -> ClientResult<ApiResponse<PaginatedResponse<Checkout>>> {
        let request = self.request(Method::GET, &["checkouts", "book", book_id])?;
        self.fetch(request).await
    }

    /// Lend a book, `PUT /checkouts`
    pub async fn create_checkout(&self, checkout: &NewCheckout) -> ClientResult<ApiResponse<Option<Checkout>>> {
        let request = self.request(Method::PUT, &["checkouts"])?.json(checkout);
        self.fetch_optional(request).await
    }

    /// Mark a checkout as returned, `PATCH /checkouts/{id}` without a body.
    ///
    /// A `204 No Content` answer yields `data: None`.
    pub async fn return_book(&self, checkout_id: &str) -> ClientResult<ApiResponse<Option<Checkout>>> {
        let request = self.request(Method::PATCH, &["checkouts", checkout_id])?;
        self.fetch_optional(request).await
    }
}
