//! Fire-and-forget cache warm-up.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use light_client::{
    ApiClient, ApiError, ConfigurationParams, NftListParams, TokenListParams,
    TransactionListCountParams, TransactionListParams, WalletParams, WalletSettingsParams,
};
use light_core::Address;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::{query_keys, QueryCache, QueryError, QueryKey};

/// Starts background fetches that populate the cache.
///
/// Every `preload_*` call returns immediately. A successful fetch writes
/// the entry under the same key the matching query reads; a failed one is
/// logged and leaves the entry untouched.
#[derive(Debug, Clone)]
pub struct Preloader {
    api: ApiClient,
    cache: QueryCache,
    handle: Handle,
    tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl Preloader {
    /// Create a preloader on the current tokio runtime.
    pub fn new(api: ApiClient, cache: QueryCache) -> Result<Self, QueryError> {
        let handle = Handle::try_current().map_err(|_| QueryError::NoRuntime)?;
        Ok(Self::with_handle(api, cache, handle))
    }

    /// Create a preloader spawning onto a specific runtime.
    pub fn with_handle(api: ApiClient, cache: QueryCache, handle: Handle) -> Self {
        Self {
            api,
            cache,
            handle,
            tasks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the cache being warmed.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Spawn a fetch that writes its result under `key`.
    pub fn preload<T, F, Fut>(&self, key: QueryKey, fetch: F)
    where
        T: Serialize + Send + 'static,
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let cache = self.cache.clone();
        let future = fetch(self.api.clone());

        let task = self.handle.spawn(async move {
            match future.await {
                Ok(value) => {
                    if let Err(e) = cache.set_query_data(&key, &value) {
                        tracing::warn!(key = %key, error = %e, "Failed to store preloaded data");
                    } else {
                        tracing::debug!(key = %key, "Preloaded");
                    }
                }
                Err(e) => {
                    tracing::debug!(key = %key, error = %e, "Preload failed");
                }
            }
        });

        let mut tasks = self.tasks();
        tasks.retain(|task| !task.is_finished());
        tasks.push(task);
    }

    /// Wait for every preload started so far.
    pub async fn idle(&self) {
        loop {
            let pending: Vec<_> = self.tasks().drain(..).collect();
            if pending.is_empty() {
                return;
            }
            for task in pending {
                if let Err(e) = task.await {
                    tracing::warn!(error = %e, "Preload task aborted");
                }
            }
        }
    }

    pub fn preload_get_wallet(&self, params: &WalletParams) {
        let address = params.address.clone();
        self.preload(query_keys::wallet::get(params), |api| async move {
            api.get_wallet(&address).await
        });
    }

    pub fn preload_get_configuration(&self, address: &Address) {
        let params = ConfigurationParams {
            address: Some(address.clone()),
        };
        let address = address.clone();
        self.preload(query_keys::configuration::get(&params), |api| async move {
            api.get_configuration(&address).await
        });
    }

    pub fn preload_get_tokens(&self, params: &TokenListParams) {
        let params_owned = params.clone();
        self.preload(query_keys::token::list(params), |api| async move {
            api.get_tokens(&params_owned).await
        });
    }

    /// NFTs are only preloaded for a known owner.
    pub fn preload_get_nfts(&self, params: &NftListParams) {
        let Some(address) = params.address.clone() else {
            return;
        };
        let params_owned = params.clone();
        self.preload(query_keys::nft::list(params), |api| async move {
            api.get_nfts_by_owner(
                &address,
                params_owned.limit,
                params_owned.is_testnet,
                params_owned.cursor.as_deref(),
            )
            .await
        });
    }

    pub fn preload_get_transactions(&self, params: &TransactionListParams) {
        let params_owned = params.clone();
        self.preload(query_keys::transaction::list(params), |api| async move {
            api.get_transactions(&params_owned).await
        });
    }

    pub fn preload_get_transactions_count(&self, params: &TransactionListCountParams) {
        let params_owned = params.clone();
        self.preload(query_keys::transaction::count(params), |api| async move {
            api.get_transactions_count(&params_owned).await
        });
    }

    pub fn preload_get_wallet_settings(&self, params: &WalletSettingsParams) {
        let params_owned = params.clone();
        self.preload(query_keys::wallet_settings::get(params), |api| async move {
            api.get_wallet_settings(&params_owned).await
        });
    }
}

#[cfg(test)]
mod tests {
    use light_client::mock::{fixtures, MockReply, MockTransport};
    use light_client::{ConfigurationData, WalletData};

    use super::*;
    use crate::{BackoffStrategy, QueryClient};

    const ADDRESS: &str = "0xFbd80Fe5cE1ECe895845Fd131bd621e2B6A1345F";

    fn address() -> Address {
        Address::parse(ADDRESS).unwrap()
    }

    fn setup() -> (MockTransport, Preloader) {
        let transport = MockTransport::new();
        let preloader =
            Preloader::new(ApiClient::new(transport.clone()), QueryCache::new()).unwrap();
        (transport, preloader)
    }

    #[test]
    fn test_requires_runtime() {
        let transport = MockTransport::new();
        let result = Preloader::new(ApiClient::new(transport), QueryCache::new());
        assert!(matches!(result, Err(QueryError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_preload_returns_before_fetch_completes() {
        let (transport, preloader) = setup();
        transport.respond("/wallet/get", MockReply::ok(fixtures::wallet(ADDRESS)));
        let gate = transport.gate("/wallet/get");

        let params = WalletParams { address: address() };
        preloader.preload_get_wallet(&params);

        let key = query_keys::wallet::get(&params);
        assert!(!preloader.cache().contains(&key));

        gate.open();
        preloader.idle().await;

        let wallet: WalletData = preloader.cache().get_query_data(&key).unwrap().unwrap();
        assert_eq!(wallet.address, address());
    }

    #[tokio::test]
    async fn test_failed_preload_leaves_entry_absent() {
        let (transport, preloader) = setup();
        transport.respond("/configuration/get", MockReply::status(500, serde_json::json!("boom")));

        preloader.preload_get_configuration(&address());
        preloader.idle().await;

        assert!(preloader.cache().is_empty());
    }

    #[tokio::test]
    async fn test_preloaded_entry_serves_query_fallback() {
        let (transport, preloader) = setup();
        transport.respond_once("/configuration/get", MockReply::ok(fixtures::configuration(ADDRESS)));
        transport.respond("/configuration/get", MockReply::transport_error("down"));

        preloader.preload_get_configuration(&address());
        preloader.idle().await;

        let queries = QueryClient::new(ApiClient::new(transport.clone()), preloader.cache().clone())
            .with_backoff(BackoffStrategy::None);
        let params = ConfigurationParams {
            address: Some(address()),
        };

        let configuration: Option<ConfigurationData> =
            queries.configuration(&params).resolve().await.unwrap();
        assert_eq!(configuration.map(|c| c.threshold), Some(1));
    }

    #[tokio::test]
    async fn test_nfts_without_owner_are_skipped() {
        let (transport, preloader) = setup();
        preloader.preload_get_nfts(&NftListParams {
            address: None,
            limit: 10,
            is_testnet: false,
            cursor: None,
        });
        preloader.idle().await;
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_independent_preloads() {
        let (transport, preloader) = setup();
        transport.respond("/transaction/list/count", MockReply::ok(fixtures::count(4)));
        transport.respond("/transaction/list", MockReply::status(500, serde_json::json!("boom")));

        preloader.preload_get_transactions(&TransactionListParams {
            address: address(),
            offset: 0,
            limit: 10,
            is_testnet: false,
        });
        let count_params = TransactionListCountParams {
            address: address(),
            is_testnet: false,
        };
        preloader.preload_get_transactions_count(&count_params);
        preloader.idle().await;

        assert_eq!(preloader.cache().keys(), vec![query_keys::transaction::count(&count_params)]);
    }
}
