//! Paginated listings

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items of the current page
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.current_page < self.pagination.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.pagination.current_page > 1
    }
}

/// Listing parameters, sent as `?page=..&size=..&search=..`
///
/// Filtering and paging happen on the backend; the client only forwards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
}

fn is_blank(search: &Option<String>) -> bool {
    search.as_deref().map_or(true, str::is_empty)
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search: None,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
