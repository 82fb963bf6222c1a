//! Route table: path patterns, redirects and the resolved route state.

use super::NavigationError;
use crate::model::ProductId;
use std::collections::HashMap;

/// Upper bound on chained redirects before a path is declared a loop.
const MAX_REDIRECTS: usize = 8;

/// The view a route activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    ProductList,
    ProductDetail,
}

/// Typed navigation target. Renders to its canonical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    ProductList,
    ProductDetail(ProductId),
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::ProductList => "/products".to_string(),
            Destination::ProductDetail(id) => format!("/products/{id}"),
        }
    }
}

/// Named values extracted from the matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The outcome of one navigation. Replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    /// Final path after redirects, normalized (`/products/2`).
    pub path: String,
    pub view: View,
    pub params: RouteParams,
    /// The path originally asked for, when a redirect was followed.
    pub redirected_from: Option<String>,
}

#[derive(Debug, Clone)]
enum Segment {
    Static(String),
    Param(String),
    /// Matches any remaining segments, including none.
    CatchAll,
}

#[derive(Debug, Clone)]
enum Target {
    View(View),
    Redirect(String),
}

#[derive(Debug, Clone)]
struct RouteEntry {
    pattern: String,
    segments: Vec<Segment>,
    target: Target,
}

/// Ordered route table. The first matching entry wins.
///
/// Patterns are written without the leading slash:
/// - Static segments: `products`
/// - Path parameters: `products/:id`
/// - Empty pattern: matches `/` only (full-path match)
/// - Catch-all: `**`
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog's routing table.
    pub fn catalog() -> Self {
        Self::new()
            .route("products", View::ProductList)
            .route("products/:id", View::ProductDetail)
            .redirect("", "/products")
            .redirect("**", "/products")
    }

    pub fn route(mut self, pattern: &str, view: View) -> Self {
        self.push(pattern, Target::View(view));
        self
    }

    pub fn redirect(mut self, pattern: &str, to: &str) -> Self {
        self.push(pattern, Target::Redirect(to.to_string()));
        self
    }

    fn push(&mut self, pattern: &str, target: Target) {
        let segments = split(pattern)
            .map(|s| {
                if s == "**" {
                    Segment::CatchAll
                } else if let Some(name) = s.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else {
                    Segment::Static(s.to_string())
                }
            })
            .collect();
        self.entries.push(RouteEntry {
            pattern: pattern.to_string(),
            segments,
            target,
        });
    }

    /// Resolves `path` to a view, following redirects.
    pub fn resolve(&self, path: &str) -> Result<RouteState, NavigationError> {
        let requested = normalize(path);
        let mut current = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let segments: Vec<&str> = split(&current).collect();
            let (entry, params) = self
                .entries
                .iter()
                .find_map(|entry| try_match(&entry.segments, &segments).map(|p| (entry, p)))
                .ok_or_else(|| NavigationError::NoRoute(requested.clone()))?;

            match &entry.target {
                Target::View(view) => {
                    let redirected_from = (current != requested).then(|| requested.clone());
                    return Ok(RouteState {
                        path: current,
                        view: *view,
                        params,
                        redirected_from,
                    });
                }
                Target::Redirect(to) => {
                    tracing::debug!(from = %current, to = %to, pattern = %entry.pattern, "Redirect");
                    current = normalize(to);
                }
            }
        }

        Err(NavigationError::RedirectLoop(requested))
    }
}

/// Strips query and fragment, collapses empty segments, and keeps one leading slash.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let joined = split(path).collect::<Vec<_>>().join("/");
    format!("/{joined}")
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn try_match(pattern: &[Segment], path: &[&str]) -> Option<RouteParams> {
    let mut params = RouteParams::new();
    let mut path_iter = path.iter();

    for segment in pattern {
        match segment {
            Segment::Static(expected) => {
                let actual = path_iter.next()?;
                if actual != expected {
                    return None;
                }
            }
            Segment::Param(name) => {
                let value = path_iter.next()?;
                params.insert(name.clone(), *value);
            }
            Segment::CatchAll => return Some(params),
        }
    }

    // Check that we consumed all path segments
    if path_iter.next().is_some() {
        return None;
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> RouteState {
        RouteTable::catalog().resolve(path).unwrap()
    }

    #[test]
    fn test_list_route() {
        let state = resolve("/products");
        assert_eq!(state.view, View::ProductList);
        assert_eq!(state.path, "/products");
        assert!(state.params.is_empty());
        assert_eq!(state.redirected_from, None);
    }

    #[test]
    fn test_detail_route_captures_textual_id() {
        let state = resolve("/products/2");
        assert_eq!(state.view, View::ProductDetail);
        assert_eq!(state.params.get("id"), Some("2"));

        let state = resolve("/products/abc");
        assert_eq!(state.view, View::ProductDetail);
        assert_eq!(state.params.get("id"), Some("abc"));
    }

    #[test]
    fn test_root_redirects_to_list() {
        let state = resolve("/");
        assert_eq!(state.view, View::ProductList);
        assert_eq!(state.path, "/products");
        assert_eq!(state.redirected_from.as_deref(), Some("/"));

        assert_eq!(resolve("").path, "/products");
    }

    #[test]
    fn test_unknown_paths_fall_back_to_list() {
        for path in ["/unknown/path", "/products/2/extra", "/product", "/PRODUCTS"] {
            let state = resolve(path);
            assert_eq!(state.view, View::ProductList, "{path}");
            assert_eq!(state.redirected_from.as_deref(), Some(normalize(path).as_str()));
        }
    }

    #[test]
    fn test_query_fragment_and_extra_slashes_are_ignored() {
        assert_eq!(resolve("/products?sort=price").redirected_from, None);
        assert_eq!(resolve("//products//").path, "/products");
        assert_eq!(resolve("/products/3#reviews").params.get("id"), Some("3"));
    }

    #[test]
    fn test_redirect_loop_is_reported() {
        let table = RouteTable::new().redirect("a", "/b").redirect("b", "/a");
        assert_eq!(table.resolve("/a"), Err(NavigationError::RedirectLoop("/a".to_string())));
    }

    #[test]
    fn test_no_route() {
        let table = RouteTable::new().route("products", View::ProductList);
        assert_eq!(table.resolve("/nope"), Err(NavigationError::NoRoute("/nope".to_string())));
    }

    #[test]
    fn test_destination_paths_round_trip_through_table() {
        let state = resolve(&Destination::ProductDetail(ProductId(7)).path());
        assert_eq!(state.path, "/products/7");
        assert_eq!(state.params.get("id"), Some("7"));
        assert_eq!(resolve(&Destination::ProductList.path()).view, View::ProductList);
    }
}
