use light_core::Address;
use serde::Serialize;

use crate::{
    ApiClient, ApiError, ApiRequest, NotificationReadBodyParams, NotificationReadData,
    NotificationSettingsData, NotificationSettingsParams, NotificationSettingsUpdateBody,
};

#[derive(Serialize)]
struct AddressQuery<'a> {
    address: &'a Address,
}

impl ApiClient {
    /// Get notification settings of a wallet.
    pub async fn get_wallet_notification_settings(
        &self,
        params: &NotificationSettingsParams,
    ) -> Result<NotificationSettingsData, ApiError> {
        let request = ApiRequest::get("/wallet/notification/settings/get")
            .query(params)?
            .revalidate(300);
        self.send(request).await
    }

    /// Overwrite notification settings of a wallet.
    pub async fn update_wallet_notification_settings(
        &self,
        address: &Address,
        body: &NotificationSettingsUpdateBody,
    ) -> Result<NotificationSettingsData, ApiError> {
        let request = ApiRequest::put("/wallet/notification/settings/update")
            .query(&AddressQuery { address })?
            .json(body)?
            .revalidate(0);
        self.send(request).await
    }

    /// Mark notifications as read.
    pub async fn read_notification(
        &self,
        body: &NotificationReadBodyParams,
    ) -> Result<NotificationReadData, ApiError> {
        let request = ApiRequest::post("/notification/read").json(body)?;
        self.send(request).await
    }
}
