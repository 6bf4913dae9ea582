//! Preloader for the explorer `/tx/[address]` page.

use light_client::{TransactionListCountParams, TransactionListParams};
use light_core::SearchParams;
use light_query::Preloader;

use super::parse_address;
use crate::handlers::address::AddressRouteParams;
use crate::PaginationState;

/// Warm the transaction page named by the `pagination` search parameter
/// and the total count.
pub fn preload(preloader: &Preloader, params: &AddressRouteParams, search: &SearchParams) {
    let pagination = PaginationState::parse_server_side(search.get("pagination").map(String::as_str));

    let Some(address) = parse_address(&params.address) else {
        return;
    };

    preloader.preload_get_transactions(&TransactionListParams {
        address: address.clone(),
        offset: pagination.offset(),
        limit: pagination.page_size,
        is_testnet: false,
    });
    preloader.preload_get_transactions_count(&TransactionListCountParams {
        address,
        is_testnet: false,
    });
}
