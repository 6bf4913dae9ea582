//! Mutations against notification endpoints.

use light_client::{
    ApiClient, ApiError, NotificationReadBodyParams, NotificationReadData,
    NotificationSettingsData, NotificationSettingsParams, NotificationSettingsUpdateBody,
};
use light_core::Address;

use crate::{query_keys, QueryCache};

/// Marks notifications as read, reporting the outcome.
#[derive(Debug, Clone)]
pub struct NotificationReadMutation {
    api: ApiClient,
}

impl NotificationReadMutation {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Run the mutation. Failures are reported and returned to the caller.
    pub async fn mutate(
        &self,
        body: &NotificationReadBodyParams,
    ) -> Result<NotificationReadData, ApiError> {
        match self.api.read_notification(body).await {
            Ok(data) => {
                tracing::info!(count = data.count, "Successfully read notifications!");
                Ok(data)
            }
            Err(e) => {
                tracing::error!(error = %e, "{}", failure_message(&e));
                Err(e)
            }
        }
    }
}

/// User-facing message for a failed read: the upstream's own message when
/// it sent one.
pub fn failure_message(error: &ApiError) -> String {
    match error.payload() {
        Some(serde_json::Value::String(message)) if !message.is_empty() => message.clone(),
        Some(serde_json::Value::Object(map)) => match map.get("message") {
            Some(serde_json::Value::String(message)) if !message.is_empty() => message.clone(),
            _ => "Failed to read notifications.".to_string(),
        },
        _ => "Failed to read notifications.".to_string(),
    }
}

/// Overwrites notification settings and refreshes the cached copy.
#[derive(Debug, Clone)]
pub struct NotificationSettingsMutation {
    api: ApiClient,
    cache: QueryCache,
}

impl NotificationSettingsMutation {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    /// Run the mutation. On success the returned settings replace the
    /// cached settings of the wallet.
    pub async fn mutate(
        &self,
        address: &Address,
        body: &NotificationSettingsUpdateBody,
    ) -> Result<NotificationSettingsData, ApiError> {
        let data = self
            .api
            .update_wallet_notification_settings(address, body)
            .await
            .inspect_err(|e| tracing::error!(address = %address, error = %e, "Failed to update notification settings"))?;

        let key = query_keys::notification_settings::get(&NotificationSettingsParams {
            address: address.clone(),
            user_id: None,
        });
        if let Err(e) = self.cache.set_query_data(&key, &data) {
            tracing::warn!(key = %key, error = %e, "Failed to cache notification settings");
        }

        Ok(data)
    }
}
