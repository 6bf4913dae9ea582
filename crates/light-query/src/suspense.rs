//! Cache-backed query resolution with retry-then-fallback.

use std::future::Future;
use std::marker::PhantomData;

use futures::future::BoxFuture;
use light_client::{
    ApiClient, ApiError, ConfigurationData, ConfigurationParams, NftDataPage, NftListParams,
    PaymasterOperationData, PaymasterOperationGetParams, TokenDataPage, TokenListParams,
    TransactionData, TransactionListParams, WalletData, WalletParams,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    query_keys, BackoffStrategy, FallbackPolicy, ImmediateFallback, PeriodicFallback, QueryCache,
    QueryError, QueryKey, QueryStatus,
};

type FetchFn<T> = Box<dyn Fn() -> BoxFuture<'static, Result<Option<T>, ApiError>> + Send + Sync>;

/// A query bound to a key, a cache and a fetch function.
///
/// Each `attempt` reads the cached value as a fallback candidate, then
/// fetches. Success overwrites the entry. Failure either propagates as
/// `QueryError::Retry` or settles on the candidate, as the policy decides.
/// A fetch that yields `Ok(None)` has nothing to load and resolves to
/// `None` without writing the cache.
pub struct SuspenseQuery<T, P = PeriodicFallback> {
    key: QueryKey,
    cache: QueryCache,
    policy: P,
    backoff: BackoffStrategy,
    fetch: FetchFn<T>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SuspenseQuery<T, PeriodicFallback>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    /// Create a query with the default periodic fallback policy.
    pub fn new<F, Fut>(key: QueryKey, cache: QueryCache, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<T>, ApiError>> + Send + 'static,
    {
        Self {
            key,
            cache,
            policy: PeriodicFallback::default(),
            backoff: BackoffStrategy::default(),
            fetch: Box::new(move || Box::pin(fetch())),
            _marker: PhantomData,
        }
    }
}

impl<T, P> SuspenseQuery<T, P>
where
    T: Serialize + DeserializeOwned + Send + 'static,
    P: FallbackPolicy,
{
    /// Replace the fallback policy.
    pub fn with_policy<Q: FallbackPolicy>(self, policy: Q) -> SuspenseQuery<T, Q> {
        SuspenseQuery {
            key: self.key,
            cache: self.cache,
            policy,
            backoff: self.backoff,
            fetch: self.fetch,
            _marker: PhantomData,
        }
    }

    /// Set the delay between retries in `resolve`.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Get the query key.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Run a single fetch attempt.
    pub async fn attempt(&self) -> Result<Option<T>, QueryError> {
        let fallback: Option<T> = self.policy.fallback_value(&self.cache, &self.key);

        self.cache.begin_fetch(&self.key);

        match (self.fetch)().await {
            Ok(Some(value)) => {
                self.cache.set_query_data(&self.key, &value)?;
                Ok(Some(value))
            }
            Ok(None) => {
                match self.cache.state(&self.key) {
                    Some(state) if state.data.is_none() && state.failure_count == 0 => {
                        self.cache.remove(&self.key);
                    }
                    _ => self.cache.mark_status(&self.key, QueryStatus::Success),
                }
                Ok(None)
            }
            Err(error) => {
                let failure_count = self.cache.record_failure(&self.key);

                if self.policy.should_retry(failure_count) {
                    self.cache.mark_status(&self.key, QueryStatus::RetryPending);
                    tracing::debug!(key = %self.key, failure_count, error = %error, "Query failed, retry pending");
                    Err(QueryError::Retry {
                        key: self.key.clone(),
                        failure_count,
                        source: error,
                    })
                } else {
                    self.cache.mark_status(&self.key, QueryStatus::Fallback);
                    tracing::warn!(
                        key = %self.key,
                        failure_count,
                        error = %error,
                        has_fallback = fallback.is_some(),
                        "Query failed, settling on cached data"
                    );
                    Ok(fallback)
                }
            }
        }
    }

    /// Attempt until the policy settles, sleeping per the backoff between
    /// retries.
    ///
    /// Terminates as long as the policy eventually stops retrying, which
    /// both built-in policies do.
    pub async fn resolve(&self) -> Result<Option<T>, QueryError> {
        let mut retries = 0;
        loop {
            match self.attempt().await {
                Err(QueryError::Retry { .. }) => {
                    let delay = self.backoff.delay_for_attempt(retries);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    retries += 1;
                }
                settled => return settled,
            }
        }
    }
}

/// Builds ready-made queries over a shared API client and cache.
#[derive(Debug, Clone)]
pub struct QueryClient {
    api: ApiClient,
    cache: QueryCache,
    backoff: BackoffStrategy,
}

impl QueryClient {
    /// Create a query client.
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self {
            api,
            cache,
            backoff: BackoffStrategy::default(),
        }
    }

    /// Set the retry backoff applied to every query built by this client.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Get the API client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Get the cache.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn query<T, F, Fut>(&self, key: QueryKey, fetch: F) -> SuspenseQuery<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<T>, ApiError>> + Send + 'static,
    {
        let api = self.api.clone();
        SuspenseQuery::new(key, self.cache.clone(), move || fetch(api.clone()))
            .with_backoff(self.backoff.clone())
    }

    /// Wallet by address.
    pub fn wallet(&self, params: &WalletParams) -> SuspenseQuery<WalletData> {
        let address = params.address.clone();
        self.query(query_keys::wallet::get(params), move |api| {
            let address = address.clone();
            async move { api.get_wallet(&address).await.map(Some) }
        })
    }

    /// Current configuration. No address resolves to `None`.
    pub fn configuration(&self, params: &ConfigurationParams) -> SuspenseQuery<ConfigurationData> {
        let address = params.address.clone();
        self.query(query_keys::configuration::get(params), move |api| {
            let address = address.clone();
            async move {
                match address {
                    Some(address) => api.get_configuration(&address).await.map(Some),
                    None => Ok(None),
                }
            }
        })
    }

    /// Token balances.
    pub fn tokens(&self, params: &TokenListParams) -> SuspenseQuery<TokenDataPage> {
        let params_owned = params.clone();
        self.query(query_keys::token::list(params), move |api| {
            let params = params_owned.clone();
            async move { api.get_tokens(&params).await.map(Some) }
        })
    }

    /// Transactions.
    pub fn transactions(&self, params: &TransactionListParams) -> SuspenseQuery<Vec<TransactionData>> {
        let params_owned = params.clone();
        self.query(query_keys::transaction::list(params), move |api| {
            let params = params_owned.clone();
            async move { api.get_transactions(&params).await.map(Some) }
        })
    }

    /// NFTs held by an address. Failures fall back immediately.
    pub fn nfts(&self, params: &NftListParams) -> SuspenseQuery<NftDataPage, ImmediateFallback> {
        let params_owned = params.clone();
        self.query(query_keys::nft::list(params), move |api| {
            let params = params_owned.clone();
            async move {
                match &params.address {
                    Some(address) => api
                        .get_nfts_by_owner(
                            address,
                            params.limit,
                            params.is_testnet,
                            params.cursor.as_deref(),
                        )
                        .await
                        .map(Some),
                    None => Ok(None),
                }
            }
        })
        .with_policy(ImmediateFallback)
    }

    /// Paymaster operation. Failures fall back immediately.
    pub fn paymaster_operation(
        &self,
        params: &PaymasterOperationGetParams,
    ) -> SuspenseQuery<PaymasterOperationData, ImmediateFallback> {
        let params_owned = params.clone();
        self.query(query_keys::paymaster_operation::get(params), move |api| {
            let params = params_owned.clone();
            async move {
                match &params.address {
                    Some(address) => api
                        .get_paymaster_operation(address, params.chain_id, params.valid_after)
                        .await
                        .map(Some),
                    None => Ok(None),
                }
            }
        })
        .with_policy(ImmediateFallback)
    }
}
