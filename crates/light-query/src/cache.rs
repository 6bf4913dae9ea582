//! Shared query cache with stale-while-revalidate semantics.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{QueryError, QueryKey};

/// Where a query is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    /// No attempt yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Fetching,
    /// The last fetch succeeded.
    Success,
    /// The last fetch failed and another attempt is expected.
    RetryPending,
    /// The last fetch failed and the query settled on the previous data.
    Fallback,
}

/// State of one cache entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryState {
    /// Last successfully fetched value. Kept across failed refetches.
    pub data: Option<Value>,
    /// Lifecycle status.
    pub status: QueryStatus,
    /// Failures recorded for this key. Never reset; wraps instead of pinning.
    pub failure_count: u64,
    /// When `data` was last written.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Process- or request-scoped query cache.
///
/// A cheap handle: clones share the same entries. Pass it explicitly to
/// preloaders, handlers and queries; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<QueryKey, QueryState>>>,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<QueryKey, QueryState>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<QueryKey, QueryState>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Get the cached value for a key.
    ///
    /// Returns `None` if nothing was ever fetched successfully.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<Option<T>, QueryError> {
        let data = self.read().get(key).and_then(|state| state.data.clone());
        match data {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the cached value for a key and mark it successful.
    pub fn set_query_data<T: Serialize>(&self, key: &QueryKey, value: &T) -> Result<(), QueryError> {
        let value = serde_json::to_value(value)?;
        let mut entries = self.write();
        let state = entries.entry(key.clone()).or_default();
        state.data = Some(value);
        state.status = QueryStatus::Success;
        state.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Get a snapshot of an entry.
    pub fn state(&self, key: &QueryKey) -> Option<QueryState> {
        self.read().get(key).cloned()
    }

    /// Check if a key holds data.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.read()
            .get(key)
            .is_some_and(|state| state.data.is_some())
    }

    /// Mark a fetch as started, creating the entry if needed.
    pub fn begin_fetch(&self, key: &QueryKey) {
        self.write().entry(key.clone()).or_default().status = QueryStatus::Fetching;
    }

    /// Record a failed fetch, leaving data untouched.
    ///
    /// Returns the failure count before this failure.
    pub fn record_failure(&self, key: &QueryKey) -> u64 {
        let mut entries = self.write();
        let state = entries.entry(key.clone()).or_default();
        let previous = state.failure_count;
        state.failure_count = previous.wrapping_add(1);
        previous
    }

    /// Set the status of an existing entry.
    pub fn mark_status(&self, key: &QueryKey, status: QueryStatus) {
        if let Some(state) = self.write().get_mut(key) {
            state.status = status;
        }
    }

    /// Remove an entry.
    pub fn remove(&self, key: &QueryKey) -> Option<QueryState> {
        self.write().remove(key)
    }

    /// Remove every entry of an entity.
    pub fn remove_entity(&self, entity: &str) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|key, _| key.entity() != entity);
        before - entries.len()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<QueryKey> {
        let mut keys: Vec<_> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Snapshot every entry holding data, for transfer to another cache.
    pub fn dehydrate(&self) -> DehydratedState {
        let mut queries: Vec<_> = self
            .read()
            .iter()
            .filter_map(|(key, state)| {
                state.data.clone().map(|data| DehydratedQuery {
                    key: key.clone(),
                    data,
                    updated_at: state.updated_at,
                })
            })
            .collect();
        queries.sort_by(|a, b| a.key.cmp(&b.key));
        DehydratedState { queries }
    }

    /// Seed entries from a snapshot.
    ///
    /// An existing entry is only replaced by strictly newer data.
    pub fn hydrate(&self, state: &DehydratedState) {
        let mut entries = self.write();
        for query in &state.queries {
            let entry = entries.entry(query.key.clone()).or_default();
            let newer = match (entry.data.is_some(), entry.updated_at, query.updated_at) {
                (false, _, _) => true,
                (true, Some(current), Some(incoming)) => incoming > current,
                (true, None, _) => true,
                (true, Some(_), None) => false,
            };
            if newer {
                entry.data = Some(query.data.clone());
                entry.updated_at = query.updated_at;
                entry.status = QueryStatus::Success;
            }
        }
    }
}

/// Serializable snapshot of a cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DehydratedState {
    pub queries: Vec<DehydratedQuery>,
}

/// One dehydrated entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DehydratedQuery {
    pub key: QueryKey,
    pub data: Value,
    pub updated_at: Option<DateTime<Utc>>,
}
