//! Client-side routing: URL path -> page
//!
//! Matching follows the declaration order of the table. Static segments
//! compare case-insensitively, one trailing slash is ignored, and query
//! strings and fragments play no part in matching.

pub mod routes;
pub mod views;

use std::collections::BTreeMap;

use crate::error::RouteError;

pub use routes::{library_routes, RouteName, RouteRecord, ViewLoading};
pub use views::ViewRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
    /// Swallows all remaining segments, possibly none
    CatchAll(&'static str),
}

impl Segment {
    fn parse(raw: &'static str) -> Self {
        match raw.strip_prefix(':') {
            Some(param) => match param.find('(') {
                Some(idx) => Segment::CatchAll(&param[..idx]),
                None => Segment::Param(param),
            },
            None => Segment::Static(raw),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    record: RouteRecord,
    segments: Vec<Segment>,
}

impl CompiledRoute {
    fn compile(record: RouteRecord) -> Self {
        let segments = split_path(record.path).map(Segment::parse).collect();
        Self { record, segments }
    }

    fn matches(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();

        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll(name) => {
                    params.insert(name.to_string(), parts.get(idx..).unwrap_or_default().join("/"));
                    return Some(params);
                }
                Segment::Static(expected) => {
                    if !parts.get(idx)?.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(idx).filter(|p| !p.is_empty())?;
                    params.insert(name.to_string(), value.to_string());
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

/// Segments of a route pattern or parameter value; empty segments are skipped
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Segments of a requested location. One leading and one trailing slash are
/// dropped; any other empty segment is kept so that it fails to match.
fn location_parts(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}

/// Result of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    /// Matched path, without query string or fragment
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub loading: ViewLoading,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn is_not_found(&self) -> bool {
        self.name == RouteName::NotFound
    }
}

/// Route table with path resolution
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router over the library pages, including the not-found fallback
    pub fn new() -> Self {
        Self::from_records(library_routes())
    }

    pub fn from_records(records: impl IntoIterator<Item = RouteRecord>) -> Self {
        Self {
            routes: records.into_iter().map(CompiledRoute::compile).collect(),
        }
    }

    pub fn routes(&self) -> impl Iterator<Item = &RouteRecord> {
        self.routes.iter().map(|r| &r.record)
    }

    pub fn record(&self, name: RouteName) -> Option<&RouteRecord> {
        self.routes().find(|r| r.name == name)
    }

    /// Resolve a location such as `/books/42?tab=history`.
    ///
    /// Returns `None` only when the table has no catch-all and nothing matches.
    pub fn resolve(&self, location: &str) -> Option<ResolvedRoute> {
        let path = location
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let parts = location_parts(path);

        let resolved = self.routes.iter().find_map(|route| {
            route.matches(&parts).map(|params| ResolvedRoute {
                name: route.record.name,
                path: format!("/{}", parts.join("/")),
                params,
                loading: route.record.loading,
            })
        });

        match &resolved {
            Some(route) if route.is_not_found() => {
                tracing::debug!(path = %route.path, "No route matched, falling back to NotFound");
            }
            None => tracing::warn!(%path, "No route matched"),
            _ => {}
        }

        resolved
    }

    /// Build the path of a named route from its parameters
    pub fn path_for(&self, name: RouteName, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.record.name == name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let lookup = |key: &str| params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        let mut parts = Vec::with_capacity(route.segments.len());
        for segment in &route.segments {
            match segment {
                Segment::Static(s) => parts.push(*s),
                Segment::Param(key) => parts.push(lookup(*key).ok_or_else(|| RouteError::MissingParam {
                    route: name.to_string(),
                    param: key.to_string(),
                })?),
                Segment::CatchAll(key) => {
                    if let Some(rest) = lookup(*key) {
                        parts.extend(split_path(rest));
                    }
                }
            }
        }

        Ok(format!("/{}", parts.join("/")))
    }
}
