use light_core::Address;
use serde::Serialize;

use crate::{ApiClient, ApiError, ApiRequest, NftDataPage};

#[derive(Serialize)]
struct NftQuery<'a> {
    address: &'a Address,
    limit: u64,
    is_testnet: bool,
    cursor: Option<&'a str>,
}

impl ApiClient {
    /// List NFTs held by an address.
    pub async fn get_nfts_by_owner(
        &self,
        address: &Address,
        limit: u64,
        is_testnet: bool,
        cursor: Option<&str>,
    ) -> Result<NftDataPage, ApiError> {
        let request = ApiRequest::get("/nft/list").query(&NftQuery {
            address,
            limit,
            is_testnet,
            cursor,
        })?;
        self.send(request).await
    }
}
