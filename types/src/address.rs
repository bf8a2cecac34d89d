//! Account address type with `S` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A c32check-encoded Stacks account address, always prefixed with `S`.
///
/// Derived from the account's public key via hash160 + c32check encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The prefix character shared by every Stacks address.
    pub const PREFIX: char = 'S';

    /// Wrap a raw address string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
