//! Network identifier and address version bytes.

use serde::{Deserialize, Serialize};

/// Identifies which Stacks network an address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The public test network.
    Testnet,
}

impl Network {
    /// Address version byte for single-signature accounts.
    pub fn single_sig_version(&self) -> u8 {
        match self {
            Self::Mainnet => 22,
            Self::Testnet => 26,
        }
    }

    /// Address version byte for multi-signature accounts.
    pub fn multi_sig_version(&self) -> u8 {
        match self {
            Self::Mainnet => 20,
            Self::Testnet => 21,
        }
    }

    /// Map an address version byte back to its network.
    ///
    /// Both the single-signature and multi-signature families are
    /// recognized; any other version byte is unknown.
    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            20 | 22 => Some(Self::Mainnet),
            21 | 26 => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Parse a caller-supplied network token.
    ///
    /// Anything other than `mainnet` or `testnet` is treated as absent, so
    /// callers fall back to address-prefix inference.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "mainnet" => Some(Self::Mainnet),
            "testnet" => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}
