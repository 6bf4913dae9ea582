//! Route preloaders.
//!
//! Each starts background fetches for the data its route will read and
//! returns immediately. Route parameters are not validated here; a
//! malformed address is skipped and left to the handler to reject.

pub mod address;
pub mod swap;
pub mod transactions;

use light_core::Address;

fn parse_address(raw: &str) -> Option<Address> {
    match Address::parse(raw) {
        Ok(address) => Some(address),
        Err(e) => {
            tracing::debug!(address = %raw, error = %e, "Skipping preload");
            None
        }
    }
}
