use http::Method;
use light_core::{Address, ClientType};
use serde_json::json;

use crate::mock::{fixtures, MockReply, MockTransport};
use crate::*;

const ADDRESS: &str = "0xFbd80Fe5cE1ECe895845Fd131bd621e2B6A1345F";

fn address() -> Address {
    Address::parse(ADDRESS).unwrap()
}

fn client() -> (ApiClient, MockTransport) {
    let transport = MockTransport::new();
    (ApiClient::new(transport.clone()), transport)
}

#[tokio::test]
async fn test_get_wallet() {
    let (client, transport) = client();
    transport.respond("/wallet/get", MockReply::ok(fixtures::wallet(ADDRESS)));

    let wallet = client.get_wallet(&address()).await.unwrap();
    assert_eq!(wallet.address, address());

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.query_param("address"), Some(ADDRESS));
}

#[tokio::test]
async fn test_get_configuration_failure_keeps_payload() {
    let (client, transport) = client();
    transport.respond(
        "/configuration/get",
        MockReply::status(404, json!({"NotFound": "Configuration not found"})),
    );

    let err = client.get_configuration(&address()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            payload: json!({"NotFound": "Configuration not found"}),
        }
    );
}

#[tokio::test]
async fn test_get_tokens_query() {
    let (client, transport) = client();
    transport.respond("/token/list", MockReply::ok(fixtures::token_page()));

    let page = client
        .get_tokens(&TokenListParams {
            address: address(),
            offset: 0,
            limit: MAX_SAFE_INTEGER,
            is_testnet: false,
            group: false,
            chain_ids: None,
        })
        .await
        .unwrap();
    assert_eq!(page.tokens.len(), 1);

    let request = &transport.requests()[0];
    assert_eq!(request.query_param("limit"), Some("9007199254740991"));
    assert_eq!(request.query_param("group"), Some("false"));
    assert_eq!(request.query_param("chain_ids"), None);
}

#[tokio::test]
async fn test_get_nfts_by_owner() {
    let (client, transport) = client();
    transport.respond("/nft/list", MockReply::ok(fixtures::nft_page()));

    let page = client
        .get_nfts_by_owner(&address(), 10, true, Some("next"))
        .await
        .unwrap();
    assert_eq!(page.nfts.len(), 1);

    let request = &transport.requests()[0];
    assert_eq!(request.query_param("is_testnet"), Some("true"));
    assert_eq!(request.query_param("cursor"), Some("next"));
}

#[tokio::test]
async fn test_transaction_endpoints() {
    let (client, transport) = client();
    transport.respond(
        "/transaction/list",
        MockReply::ok(json!([{"chain_id": 1, "hash": "0x01", "timestamp": "2024-01-01T00:00:00Z"}])),
    );
    transport.respond("/transaction/list/count", MockReply::ok(fixtures::count(42)));

    let transactions = client
        .get_transactions(&TransactionListParams {
            address: address(),
            offset: 20,
            limit: 10,
            is_testnet: false,
        })
        .await
        .unwrap();
    assert_eq!(transactions.len(), 1);

    let count = client
        .get_transactions_count(&TransactionListCountParams {
            address: address(),
            is_testnet: false,
        })
        .await
        .unwrap();
    assert_eq!(count.count, 42);
}

#[tokio::test]
async fn test_get_paymaster_operation() {
    let (client, transport) = client();
    transport.respond(
        "/paymaster_operation/get",
        MockReply::ok(json!({"id": "op-1", "valid_after": 100, "valid_until": 200})),
    );

    let operation = client
        .get_paymaster_operation(&address(), 137, 100)
        .await
        .unwrap();
    assert_eq!(operation.valid_until, 200);
    assert_eq!(transport.requests()[0].query_param("chain_id"), Some("137"));
}

#[tokio::test]
async fn test_wallet_settings_use_admin() {
    let (client, transport) = client();
    transport.respond(
        "/wallet/settings/get",
        MockReply::ok(json!({"is_enabled_testnet": true})),
    );

    let settings = client
        .get_wallet_settings(&WalletSettingsParams { address: address() })
        .await
        .unwrap();
    assert!(settings.is_enabled_testnet);
    assert!(!settings.is_enabled_dev);

    let request = &transport.requests()[0];
    assert_eq!(request.client_type, Some(ClientType::Admin));
    assert_eq!(request.revalidate, Some(300));
}

#[tokio::test]
async fn test_notification_endpoints() {
    let (client, transport) = client();
    transport.respond(
        "/wallet/notification/settings/update",
        MockReply::ok(json!({"settings": [{"key": "transaction", "value": false}]})),
    );
    transport.respond("/notification/read", MockReply::ok(fixtures::count(2)));

    let body = NotificationSettingsUpdateBody {
        wallet_notification_settings: NotificationSettingsUpdate {
            settings: Some(vec![NotificationSetting {
                key: "transaction".to_string(),
                value: false,
            }]),
        },
    };
    let settings = client
        .update_wallet_notification_settings(&address(), &body)
        .await
        .unwrap();
    assert_eq!(settings.settings.len(), 1);

    let read = client
        .read_notification(&NotificationReadBodyParams {
            notifications: vec![
                NotificationReadItem { id: "n1".to_string() },
                NotificationReadItem { id: "n2".to_string() },
            ],
        })
        .await
        .unwrap();
    assert_eq!(read.count, 2);

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].revalidate, Some(0));
    assert_eq!(
        requests[0].body,
        Some(json!({"wallet_notification_settings": {"settings": [{"key": "transaction", "value": false}]}}))
    );
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].body, Some(json!({"notifications": [{"id": "n1"}, {"id": "n2"}]})));
}

#[tokio::test]
async fn test_transport_failure() {
    let (client, transport) = client();
    transport.respond("/wallet/get", MockReply::transport_error("Database error"));

    let err = client.get_wallet(&address()).await.unwrap_err();
    assert_eq!(err, ApiError::Transport("Database error".to_string()));
}
