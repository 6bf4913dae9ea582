//! Retry-then-fallback policies for queries.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{QueryCache, QueryKey};

/// Decides whether a failed fetch is retried or settles on cached data.
pub trait FallbackPolicy: Send + Sync {
    /// `failure_count` is the number of failures recorded for the key
    /// before the current one.
    fn should_retry(&self, failure_count: u64) -> bool;

    /// Value a query settles on when it stops retrying.
    ///
    /// Defaults to the last successfully cached value. An entry that no
    /// longer decodes as `T` counts as absent.
    fn fallback_value<T: DeserializeOwned>(&self, cache: &QueryCache, key: &QueryKey) -> Option<T>
    where
        Self: Sized,
    {
        match cache.get_query_data(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring undecodable cache entry");
                None
            }
        }
    }
}

/// Retry, retry, fall back; then repeat.
///
/// Within every block of `period` consecutive failures, the last one
/// settles on the cached value and all others propagate. With the default
/// period of 3 a query never fails more than twice in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicFallback {
    period: u32,
}

impl PeriodicFallback {
    /// Create a policy with a custom cycle length (at least 1).
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
        }
    }

    /// Get the cycle length.
    pub fn period(&self) -> u32 {
        self.period
    }
}

impl Default for PeriodicFallback {
    fn default() -> Self {
        Self::new(3)
    }
}

impl FallbackPolicy for PeriodicFallback {
    fn should_retry(&self, failure_count: u64) -> bool {
        let period = u64::from(self.period);
        failure_count % period != period - 1
    }
}

/// Never retry; every failure settles on the cached value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImmediateFallback;

impl FallbackPolicy for ImmediateFallback {
    fn should_retry(&self, _failure_count: u64) -> bool {
        false
    }
}

/// Backoff strategy between retry attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackoffStrategy {
    /// No delay between retries.
    None,
    /// Fixed delay between retries.
    Fixed(Duration),
    /// Exponential backoff with base and max.
    Exponential {
        /// Initial delay.
        base: Duration,
        /// Maximum delay.
        max: Duration,
    },
}

impl BackoffStrategy {
    /// Calculate delay for a given attempt number (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Fixed(d) => *d,
            Self::Exponential { base, max } => {
                let multiplier = 2u32.saturating_pow(attempt);
                std::cmp::min(base.saturating_mul(multiplier), *max)
            }
        }
    }
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_secs(1),
            max: Duration::from_secs(30),
        }
    }
}
