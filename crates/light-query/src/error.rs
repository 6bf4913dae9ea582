//! Query layer error types.

use light_client::ApiError;

use crate::QueryKey;

/// Errors surfaced by the query layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    /// A fetch failed and the policy asks the caller to try again.
    #[error("Query {key} failed ({failure_count} earlier failures), retry pending: {source}")]
    Retry {
        key: QueryKey,
        failure_count: u64,
        #[source]
        source: ApiError,
    },

    /// A value could not be stored in or read from the cache.
    #[error("Cache serialization error: {0}")]
    Serialization(String),

    /// Preloading needs a tokio runtime.
    #[error("No tokio runtime available for preloading")]
    NoRuntime,
}

impl QueryError {
    /// Check if this error asks for another attempt.
    pub fn is_retry(&self) -> bool {
        matches!(self, Self::Retry { .. })
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Serialization(e.to_string())
    }
}
