use light_core::Address;
use serde::Serialize;

use crate::{ApiClient, ApiError, ApiRequest, PaymasterOperationData};

#[derive(Serialize)]
struct PaymasterOperationQuery<'a> {
    address: &'a Address,
    chain_id: u64,
    valid_after: u64,
}

impl ApiClient {
    /// Get the paymaster operation of an address valid after a timestamp.
    pub async fn get_paymaster_operation(
        &self,
        address: &Address,
        chain_id: u64,
        valid_after: u64,
    ) -> Result<PaymasterOperationData, ApiError> {
        let request = ApiRequest::get("/paymaster_operation/get").query(&PaymasterOperationQuery {
            address,
            chain_id,
            valid_after,
        })?;
        self.send(request).await
    }
}
