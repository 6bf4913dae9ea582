//! Handler for the `/[address]` pages.

use light_client::{ApiClient, ConfigurationData, WalletData};
use light_query::CombineAll;
use serde::{Deserialize, Serialize};

use crate::validators::validate_address;
use crate::NotFound;

/// Route parameters of an address page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRouteParams {
    pub address: String,
}

/// Data every address page renders with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPageData {
    pub wallet: WalletData,
    pub config: ConfigurationData,
}

/// Load the wallet and its configuration.
pub async fn handle(api: &ApiClient, params: &AddressRouteParams) -> Result<AddressPageData, NotFound> {
    let address = validate_address(&params.address).map_err(|e| {
        tracing::warn!(address = %params.address, error = %e, "Rejected address route parameter");
        NotFound::from(e)
    })?;

    let (wallet, config) = futures::join!(api.get_wallet(&address), api.get_configuration(&address));

    match (wallet, config).combine_all() {
        Ok((wallet, config)) => Ok(AddressPageData { wallet, config }),
        Err(errors) => {
            let not_found = NotFound::from(errors);
            tracing::warn!(address = %address, cause = %not_found.cause, "Address page not found");
            Err(not_found)
        }
    }
}
