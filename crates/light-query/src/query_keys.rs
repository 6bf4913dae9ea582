//! Query keys for every cached entity.
//!
//! Preloaders write and queries read through these functions only, so a
//! page that preloads with a parameter set hits the entry a later query
//! with the same parameters reads.

use serde_json::json;

use crate::QueryKey;

pub mod wallet {
    use light_client::WalletParams;

    use super::*;

    pub fn get(params: &WalletParams) -> QueryKey {
        QueryKey::new("wallet", "get", json!({ "address": params.address }))
    }
}

pub mod configuration {
    use light_client::ConfigurationParams;

    use super::*;

    pub fn get(params: &ConfigurationParams) -> QueryKey {
        QueryKey::new("configuration", "get", json!({ "address": params.address }))
    }
}

pub mod token {
    use light_client::{TokenListCountParams, TokenListParams};

    use super::*;

    pub fn list(params: &TokenListParams) -> QueryKey {
        QueryKey::new(
            "token",
            "list",
            json!({
                "address": params.address,
                "offset": params.offset,
                "limit": params.limit,
                "is_testnet": params.is_testnet,
                "group": params.group,
                "chain_ids": params.chain_ids,
            }),
        )
    }

    pub fn count(params: &TokenListCountParams) -> QueryKey {
        QueryKey::new(
            "token",
            "count",
            json!({
                "address": params.address,
                "is_testnet": params.is_testnet,
                "chain_ids": params.chain_ids,
            }),
        )
    }
}

pub mod nft {
    use light_client::NftListParams;

    use super::*;

    pub fn list(params: &NftListParams) -> QueryKey {
        QueryKey::new(
            "nft",
            "list",
            json!({
                "address": params.address,
                "is_testnet": params.is_testnet,
                "limit": params.limit,
                "cursor": params.cursor,
            }),
        )
    }
}

pub mod transaction {
    use light_client::{TransactionListCountParams, TransactionListParams};

    use super::*;

    pub fn list(params: &TransactionListParams) -> QueryKey {
        QueryKey::new(
            "transaction",
            "list",
            json!({
                "address": params.address,
                "offset": params.offset,
                "limit": params.limit,
                "is_testnet": params.is_testnet,
            }),
        )
    }

    pub fn count(params: &TransactionListCountParams) -> QueryKey {
        QueryKey::new(
            "transaction",
            "count",
            json!({
                "address": params.address,
                "is_testnet": params.is_testnet,
            }),
        )
    }
}

pub mod paymaster_operation {
    use light_client::PaymasterOperationGetParams;

    use super::*;

    pub fn get(params: &PaymasterOperationGetParams) -> QueryKey {
        QueryKey::new(
            "paymaster_operation",
            "get",
            json!({
                "address": params.address,
                "chain_id": params.chain_id,
                "valid_after": params.valid_after,
            }),
        )
    }
}

pub mod wallet_settings {
    use light_client::WalletSettingsParams;

    use super::*;

    pub fn get(params: &WalletSettingsParams) -> QueryKey {
        QueryKey::new("wallet_settings", "get", json!({ "address": params.address }))
    }
}

pub mod notification_settings {
    use light_client::NotificationSettingsParams;

    use super::*;

    pub fn get(params: &NotificationSettingsParams) -> QueryKey {
        QueryKey::new(
            "notification_settings",
            "get",
            json!({
                "address": params.address,
                "user_id": params.user_id,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use light_client::{ConfigurationParams, NftListParams, TokenListParams, WalletParams};
    use light_core::Address;

    use super::*;

    fn address(raw: &str) -> Address {
        Address::parse(raw).unwrap()
    }

    const A: &str = "0xFbd80Fe5cE1ECe895845Fd131bd621e2B6A1345F";
    const B: &str = "0x4fd9D0eE6D6564E80A9Ee00c0163fC952d0A45Ed";

    fn tokens(address_raw: &str, offset: u64) -> TokenListParams {
        TokenListParams {
            address: address(address_raw),
            offset,
            limit: 10,
            is_testnet: false,
            group: false,
            chain_ids: None,
        }
    }

    #[test]
    fn test_identical_params_identical_keys() {
        assert_eq!(token::list(&tokens(A, 0)), token::list(&tokens(A, 0)));
        assert_eq!(
            wallet::get(&WalletParams { address: address(A) }),
            wallet::get(&WalletParams { address: address(A) })
        );
    }

    #[test]
    fn test_discriminating_params() {
        assert_ne!(token::list(&tokens(A, 0)), token::list(&tokens(B, 0)));
        assert_ne!(token::list(&tokens(A, 0)), token::list(&tokens(A, 10)));

        let mut testnet = tokens(A, 0);
        testnet.is_testnet = true;
        assert_ne!(token::list(&tokens(A, 0)), token::list(&testnet));
    }

    #[test]
    fn test_entities_do_not_collide() {
        let params = WalletParams { address: address(A) };
        let config = ConfigurationParams {
            address: Some(address(A)),
        };
        assert_ne!(wallet::get(&params), configuration::get(&config));
    }

    #[test]
    fn test_missing_address_key() {
        let key = configuration::get(&ConfigurationParams::default());
        assert_eq!(key.to_string(), r#"configuration.get{"address":null}"#);
    }

    #[test]
    fn test_nft_key_shape() {
        let key = nft::list(&NftListParams {
            address: Some(address(A)),
            limit: 5,
            is_testnet: false,
            cursor: None,
        });
        assert_eq!(
            key.params(),
            format!(r#"{{"address":"{}","cursor":null,"is_testnet":false,"limit":5}}"#, A)
        );
    }
}
