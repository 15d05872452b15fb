//! Data models shared by the service and its callers

pub mod book;
pub mod checkout;
pub mod dashboard;
pub mod pagination;

// Re-export commonly used types
pub use book::{Book, BookUpdate, NewBook};
pub use checkout::{Checkout, NewCheckout};
pub use dashboard::DashboardStats;
pub use pagination::{ListQuery, PaginatedResponse, Pagination};
