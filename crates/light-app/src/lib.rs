//! Page-level glue for the wallet dashboard and explorer.
//!
//! This crate provides:
//! - `validators` - Route parameter guards
//! - `handlers` - Combine fetches into page data or a not-found signal
//! - `preloaders` - Warm the query cache for a route without blocking
//! - `PaginationState` - `pagination` search parameter parsing
//! - `Tabs` - Initial tab selection from the current path
//! - `pages` - Server-side page loading with a dehydrated cache snapshot

mod error;
pub mod handlers;
mod pagination;
pub mod pages;
pub mod preloaders;
mod tabs;
pub mod validators;

pub use error::*;
pub use pagination::*;
pub use tabs::*;
