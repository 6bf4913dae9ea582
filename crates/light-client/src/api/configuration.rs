use light_core::Address;
use serde::Serialize;

use crate::{ApiClient, ApiError, ApiRequest, ConfigurationData};

#[derive(Serialize)]
struct ConfigurationQuery<'a> {
    address: &'a Address,
}

impl ApiClient {
    /// Get the current configuration of a wallet.
    pub async fn get_configuration(&self, address: &Address) -> Result<ConfigurationData, ApiError> {
        let request =
            ApiRequest::get("/configuration/get").query(&ConfigurationQuery { address })?;
        self.send(request).await
    }
}
