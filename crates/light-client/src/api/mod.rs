//! Endpoint wrappers.
//!
//! Each wrapper issues exactly one call and returns `Result<T, ApiError>`.

mod configuration;
mod nft;
mod notification;
mod paymaster_operation;
mod token;
mod transaction;
mod wallet;
mod wallet_settings;

#[cfg(test)]
mod tests;
