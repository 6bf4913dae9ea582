//! Core types for the wallet data layer.
//!
//! This crate provides:
//! - `Address` - Validated wallet address
//! - `validate_address` - Route parameter guard
//! - `RequestContext` - Route and search parameters for a page request
//! - `ClientConfig` / `ClientType` - Upstream API configuration

mod address;
mod config;
mod context;

pub use address::*;
pub use config::*;
pub use context::*;
