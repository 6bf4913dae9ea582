use light_core::ClientType;

use crate::{ApiClient, ApiError, ApiRequest, WalletSettingsData, WalletSettingsParams};

impl ApiClient {
    /// Get wallet settings. Always served by the admin upstream.
    pub async fn get_wallet_settings(
        &self,
        params: &WalletSettingsParams,
    ) -> Result<WalletSettingsData, ApiError> {
        let request = ApiRequest::get("/wallet/settings/get")
            .query(params)?
            .client_type(ClientType::Admin)
            .revalidate(300);
        self.send(request).await
    }
}
