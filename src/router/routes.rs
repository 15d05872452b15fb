//! Route table of the library client

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// Named pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Dashboard,
    Checkout,
    Books,
    BookDetail,
    EditBook,
    AddBook,
    NotFound,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Dashboard => "Dashboard",
            RouteName::Checkout => "Checkout",
            RouteName::Books => "Books",
            RouteName::BookDetail => "BookDetail",
            RouteName::EditBook => "EditBook",
            RouteName::AddBook => "AddBook",
            RouteName::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dashboard" => Ok(RouteName::Dashboard),
            "Checkout" => Ok(RouteName::Checkout),
            "Books" => Ok(RouteName::Books),
            "BookDetail" => Ok(RouteName::BookDetail),
            "EditBook" => Ok(RouteName::EditBook),
            "AddBook" => Ok(RouteName::AddBook),
            "NotFound" => Ok(RouteName::NotFound),
            other => Err(RouteError::UnknownRoute(other.to_string())),
        }
    }
}

/// When the view behind a route is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLoading {
    /// At startup
    Eager,
    /// On first navigation
    Lazy,
}

/// One path -> view binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Pattern such as `/books/:id/edit`; `:name(.*)*` captures the rest of the path
    pub path: &'static str,
    pub name: RouteName,
    pub loading: ViewLoading,
}

impl RouteRecord {
    pub const fn new(path: &'static str, name: RouteName, loading: ViewLoading) -> Self {
        Self { path, name, loading }
    }
}

/// Routes in match order. The catch-all must stay last.
pub fn library_routes() -> Vec<RouteRecord> {
    use RouteName::*;
    use ViewLoading::*;

    vec![
        RouteRecord::new("/", Dashboard, Eager),
        RouteRecord::new("/checkout", Checkout, Eager),
        RouteRecord::new("/books", Books, Eager),
        RouteRecord::new("/books/:id", BookDetail, Lazy),
        RouteRecord::new("/books/:id/edit", EditBook, Lazy),
        RouteRecord::new("/add-book", AddBook, Eager),
        RouteRecord::new("/:pathMatch(.*)*", NotFound, Eager),
    ]
}
