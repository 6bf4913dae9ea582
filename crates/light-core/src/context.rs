//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

        Self(format!("{:x}-{:x}", timestamp, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracted route parameters (e.g., `address` from `/[address]/overview`).
pub type RouteParams = HashMap<String, String>;

/// Search (query string) parameters.
pub type SearchParams = HashMap<String, String>;

/// Typed request context passed to preloaders, handlers and page loaders.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// Request path without the query string.
    pub path: String,
    /// Extracted route parameters.
    pub params: RouteParams,
    /// Search parameters.
    pub search: SearchParams,
}

impl RequestContext {
    /// Create a new request context for a path.
    ///
    /// A trailing `?a=b&c=d` query string is split off into `search`.
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        Self {
            request_id: RequestId::generate(),
            path: path.to_string(),
            params: HashMap::new(),
            search: query.map(parse_query).unwrap_or_default(),
        }
    }

    /// Add a route parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Get a search parameter by name.
    pub fn search_param(&self, name: &str) -> Option<&str> {
        self.search.get(name).map(|s| s.as_str())
    }

    /// Non-empty path segments.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

fn parse_query(query: &str) -> SearchParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}
