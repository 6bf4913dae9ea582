//! Preloader for the `/[address]` pages.

use light_client::WalletParams;
use light_query::Preloader;

use super::parse_address;
use crate::handlers::address::AddressRouteParams;

/// Warm the wallet and configuration entries.
pub fn preload(preloader: &Preloader, params: &AddressRouteParams) {
    let Some(address) = parse_address(&params.address) else {
        return;
    };

    preloader.preload_get_wallet(&WalletParams {
        address: address.clone(),
    });
    preloader.preload_get_configuration(&address);
}
