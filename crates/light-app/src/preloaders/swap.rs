//! Preloader for the `/[address]/swap` page.

use light_client::{NftListParams, TokenListParams, MAX_SAFE_INTEGER};
use light_core::Address;
use light_query::Preloader;

use super::parse_address;
use crate::handlers::address::AddressRouteParams;

/// Every mainnet token, ungrouped, across all chains.
pub fn token_params(address: &Address) -> TokenListParams {
    TokenListParams {
        address: address.clone(),
        offset: 0,
        limit: MAX_SAFE_INTEGER,
        is_testnet: false,
        group: false,
        chain_ids: None,
    }
}

/// Every mainnet NFT from the first page cursor.
pub fn nft_params(address: &Address) -> NftListParams {
    NftListParams {
        address: Some(address.clone()),
        limit: MAX_SAFE_INTEGER,
        is_testnet: false,
        cursor: None,
    }
}

/// Warm the address entries plus the full token and NFT lists.
pub fn preload(preloader: &Preloader, params: &AddressRouteParams) {
    super::address::preload(preloader, params);

    let Some(address) = parse_address(&params.address) else {
        return;
    };
    preloader.preload_get_tokens(&token_params(&address));
    preloader.preload_get_nfts(&nft_params(&address));
}
