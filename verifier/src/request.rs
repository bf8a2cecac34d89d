//! The untrusted request crossing the library boundary.

use serde::{Deserialize, Serialize};
use stacksig_types::Network;

/// One verification request.
///
/// Every field arrives externally supplied and untrusted; the
/// orchestrator validates each before any cryptographic work happens.
/// Absent fields deserialize as empty and fail the presence check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Claimed c32check account address.
    #[serde(default)]
    pub address: String,

    /// The plaintext message that was signed.
    #[serde(default)]
    pub message: String,

    /// Hex-encoded 65-byte RSV signature.
    #[serde(default)]
    pub signature: String,

    /// Hex-encoded SEC1 public key, compressed or uncompressed.
    #[serde(default)]
    pub public_key: String,

    /// Explicit network hint. `None` falls back to address-prefix
    /// inference.
    #[serde(default)]
    pub network: Option<Network>,
}
