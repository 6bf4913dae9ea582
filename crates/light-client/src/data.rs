//! Response data types.
//!
//! Optional fields default so older API versions still decode.

use light_core::Address;
use serde::{Deserialize, Serialize};

use crate::NotificationSetting;

/// A smart-contract wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletData {
    pub address: Address,
    pub factory_address: String,
    pub name: String,
    pub salt: String,
}

/// The current signer configuration of a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationData {
    pub id: String,
    pub address: Address,
    pub checkpoint: u64,
    pub image_hash: String,
    pub threshold: u64,
    #[serde(default)]
    pub owners: Vec<ConfigurationOwnerData>,
}

/// A signer of a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationOwnerData {
    pub id: String,
    pub address: Address,
    pub index: u32,
    pub weight: u32,
}

/// A token balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenData {
    pub id: String,
    pub address: String,
    pub amount: f64,
    pub balance_usd: f64,
    pub chain_id: u64,
    pub decimals: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub symbol: String,
    #[serde(default)]
    pub group: Option<TokenGroupData>,
}

/// Tokens grouped across chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGroupData {
    pub id: String,
    #[serde(default)]
    pub tokens: Vec<TokenData>,
}

/// A page of token balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDataPage {
    #[serde(default)]
    pub balance_usd: f64,
    #[serde(default)]
    pub tokens: Vec<TokenData>,
}

/// Token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCountData {
    pub count: u64,
}

/// An NFT held by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftData {
    pub nft_id: String,
    pub chain: String,
    pub contract_address: String,
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A page of NFTs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftDataPage {
    #[serde(default)]
    pub nfts: Vec<NftData>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// An indexed on-chain transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    pub chain_id: u64,
    pub hash: String,
    pub timestamp: String,
}

/// Transaction count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCountData {
    pub count: u64,
}

/// A sponsored operation recorded by the paymaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymasterOperationData {
    pub id: String,
    pub valid_after: u64,
    pub valid_until: u64,
    #[serde(default)]
    pub paymaster_id: Option<String>,
}

/// Per-wallet feature switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSettingsData {
    #[serde(default)]
    pub is_enabled_testnet: bool,
    #[serde(default)]
    pub is_enabled_dev: bool,
}

/// Notification preferences of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationSettingsData {
    #[serde(default)]
    pub settings: Vec<NotificationSetting>,
}

/// Result of marking notifications as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationReadData {
    #[serde(default)]
    pub count: u64,
}
