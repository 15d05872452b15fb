//! Library management client
//!
//! A typed wrapper around the library REST API (books, checkouts and
//! dashboard counters) and the route table of the librarian web client.

pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;

pub use config::AppConfig;
pub use error::{ClientError, ClientResult, RouteError};
pub use router::{ResolvedRoute, RouteName, Router};
pub use services::{ApiResponse, LibraryService};
