//! Wallet addresses and the route parameter guard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of the hex part of an address (20 bytes).
const ADDRESS_HEX_LEN: usize = 40;

/// Error raised when a route parameter does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Missing parameter: {0}")]
    MissingParam(&'static str),
}

/// A well-formed `0x`-prefixed, 20-byte hex address.
///
/// Input casing is kept; equality is case-sensitive like the
/// upstream API's string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and validate an address.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let hex = raw
            .strip_prefix("0x")
            .ok_or_else(|| ValidationError::InvalidAddress(raw.to_string()))?;

        if hex.len() != ADDRESS_HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidAddress(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Guard a raw route parameter.
///
/// Callers propagate the error with `?` so nothing after the guard runs.
pub fn validate_address(raw: &str) -> Result<Address, ValidationError> {
    Address::parse(raw)
}
