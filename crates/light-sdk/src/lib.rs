//! Public SDK for the wallet data layer.
//!
//! This crate re-exports every layer:
//!
//! ```ignore
//! use light_sdk::prelude::*;
//!
//! async fn render(ctx: RequestContext, config: &ClientConfig) -> Result<AddressPage, NotFound> {
//!     let api = ApiClient::http(config).expect("client");
//!     let cache = QueryCache::new();
//!
//!     let page = pages::address::load(&ctx, &api, &cache).await?;
//!     let tabs = Tabs::mount(
//!         vec![Tab::new("overview", "Overview", "/overview"), Tab::new("assets", "Assets", "/assets")],
//!         ctx.path.clone(),
//!     );
//!
//!     Ok(page)
//! }
//! ```

pub use light_app;
pub use light_client;
pub use light_core;
pub use light_query;

/// Prelude for convenient imports.
pub mod prelude {
    pub use light_app::*;
    pub use light_client::*;
    pub use light_core::*;
    pub use light_query::*;
}
