use light_core::Address;
use serde::Serialize;

use crate::{ApiClient, ApiError, ApiRequest, WalletData};

#[derive(Serialize)]
struct WalletQuery<'a> {
    address: &'a Address,
}

impl ApiClient {
    /// Get a wallet by address.
    pub async fn get_wallet(&self, address: &Address) -> Result<WalletData, ApiError> {
        let request = ApiRequest::get("/wallet/get").query(&WalletQuery { address })?;
        self.send(request).await
    }
}
