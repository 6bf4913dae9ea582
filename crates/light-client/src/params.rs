//! Request parameter types.
//!
//! These double as the discriminating fields of query keys, so two values
//! that compare equal always address the same cache entry.

use light_core::Address;
use serde::{Deserialize, Serialize};

/// Largest integer a JSON client can represent exactly; used as "no limit".
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Wallet lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletParams {
    pub address: Address,
}

/// Configuration lookup. A missing address resolves to no data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ConfigurationParams {
    pub address: Option<Address>,
}

/// Token balances, paginated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenListParams {
    pub address: Address,
    pub offset: u64,
    pub limit: u64,
    pub is_testnet: bool,
    pub group: bool,
    /// Colon-separated chain ids, or every chain when `None`.
    pub chain_ids: Option<String>,
}

/// Token count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenListCountParams {
    pub address: Address,
    pub is_testnet: bool,
    pub chain_ids: Option<String>,
}

/// NFTs held by an address, cursor paginated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NftListParams {
    pub address: Option<Address>,
    pub limit: u64,
    pub is_testnet: bool,
    pub cursor: Option<String>,
}

/// Transactions, paginated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionListParams {
    pub address: Address,
    pub offset: u64,
    pub limit: u64,
    pub is_testnet: bool,
}

/// Transaction count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionListCountParams {
    pub address: Address,
    pub is_testnet: bool,
}

/// A paymaster operation by validity window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymasterOperationGetParams {
    pub address: Option<Address>,
    pub chain_id: u64,
    pub valid_after: u64,
}

/// Wallet settings lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletSettingsParams {
    pub address: Address,
}

/// Notification settings lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationSettingsParams {
    pub address: Address,
    pub user_id: Option<String>,
}

/// Notifications to mark as read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationReadBodyParams {
    pub notifications: Vec<NotificationReadItem>,
}

/// A single notification reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationReadItem {
    pub id: String,
}

/// A single notification setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSetting {
    pub key: String,
    pub value: bool,
}

/// Body for updating notification settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationSettingsUpdateBody {
    pub wallet_notification_settings: NotificationSettingsUpdate,
}

/// Settings to overwrite; `None` leaves them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationSettingsUpdate {
    pub settings: Option<Vec<NotificationSetting>>,
}
