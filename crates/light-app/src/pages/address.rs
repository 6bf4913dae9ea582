//! Loader for the `/[address]` pages.

use light_client::{ApiClient, ConfigurationParams, WalletParams};
use light_core::{validate_address, RequestContext, ValidationError};
use light_query::{query_keys, DehydratedState, Preloader, QueryCache};
use serde::{Deserialize, Serialize};

use crate::handlers::address::{self as handler, AddressPageData, AddressRouteParams};
use crate::{preloaders, NotFound};

/// A loaded address page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPage {
    pub data: AddressPageData,
    /// Cache snapshot to hydrate the client with.
    pub state: DehydratedState,
}

/// Load an address page from the `address` route parameter.
pub async fn load(ctx: &RequestContext, api: &ApiClient, cache: &QueryCache) -> Result<AddressPage, NotFound> {
    let params = AddressRouteParams {
        address: ctx
            .param("address")
            .ok_or(ValidationError::MissingParam("address"))?
            .to_string(),
    };

    match Preloader::new(api.clone(), cache.clone()) {
        Ok(preloader) => preloaders::address::preload(&preloader, &params),
        Err(e) => tracing::debug!(request_id = %ctx.request_id, error = %e, "Preloading disabled"),
    }

    let data = handler::handle(api, &params).await?;

    // Keyed by the route address so client queries for this route hit them.
    let address = validate_address(&params.address)?;
    let wallet_key = query_keys::wallet::get(&WalletParams {
        address: address.clone(),
    });
    let config_key = query_keys::configuration::get(&ConfigurationParams {
        address: Some(address),
    });
    if let Err(e) = cache
        .set_query_data(&wallet_key, &data.wallet)
        .and_then(|_| cache.set_query_data(&config_key, &data.config))
    {
        tracing::warn!(request_id = %ctx.request_id, error = %e, "Failed to seed page cache");
    }

    tracing::debug!(request_id = %ctx.request_id, path = %ctx.path, "Address page loaded");

    Ok(AddressPage {
        data,
        state: cache.dehydrate(),
    })
}
