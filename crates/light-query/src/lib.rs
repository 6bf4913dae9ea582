//! Query cache, suspense queries and preloading for the wallet data layer.
//!
//! This crate provides:
//! - `QueryKey` / `query_keys` - Deterministic cache keys
//! - `QueryCache` - Injectable stale-while-revalidate store with hydration
//! - `combine_all` / `CombineAll` - All-or-nothing result combination
//! - `FallbackPolicy` - Retry-then-fallback strategies
//! - `SuspenseQuery` / `QueryClient` - Cache-backed query resolution
//! - `Preloader` - Fire-and-forget cache warm-up
//! - Mutations for notification endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use light_query::{QueryCache, QueryClient};
//!
//! let cache = QueryCache::new();
//! let queries = QueryClient::new(api, cache.clone());
//!
//! // Retries twice, then settles on the last cached value.
//! let configuration = queries.configuration(&params).resolve().await?;
//! ```

mod cache;
mod combine;
mod error;
mod key;
mod mutation;
mod policy;
mod preload;
pub mod query_keys;
mod suspense;

pub use cache::*;
pub use combine::*;
pub use error::*;
pub use key::*;
pub use mutation::*;
pub use policy::*;
pub use preload::*;
pub use suspense::*;
