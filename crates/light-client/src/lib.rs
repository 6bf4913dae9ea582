//! Typed REST client for the wallet API.
//!
//! This crate provides:
//! - `Transport` - The seam every remote call goes through
//! - `HttpTransport` - reqwest-backed transport driven by `ClientConfig`
//! - `ApiClient` - Endpoint wrappers returning `Result<T, ApiError>`
//! - Data and parameter types shared with the query layer
//!
//! A call succeeds only when the upstream answers `200` with a non-null
//! body. Anything else is an `ApiError` carrying the upstream payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use light_client::ApiClient;
//! use light_core::{validate_address, ClientConfig};
//!
//! let client = ApiClient::http(&ClientConfig::from_env())?;
//! let address = validate_address("0xFbd80Fe5cE1ECe895845Fd131bd621e2B6A1345F")?;
//! let wallet = client.get_wallet(&address).await?;
//! ```

pub mod api;
mod client;
mod data;
mod error;
mod params;
mod request;
mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::*;
pub use data::*;
pub use error::*;
pub use params::*;
pub use request::*;
pub use transport::*;
