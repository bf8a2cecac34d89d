//! Key and signature types for secp256k1 message verification.

use serde::{Deserialize, Serialize};

/// A SEC1-encoded secp256k1 public key, compressed (33 bytes) or
/// uncompressed (65 bytes).
///
/// The byte form is preserved exactly as supplied: address derivation
/// hashes the key bytes as given. Use `stacksig_crypto::parse_public_key`
/// to construct a key validated against the curve.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// Length of a compressed SEC1 key.
    pub const COMPRESSED_LEN: usize = 33;
    /// Length of an uncompressed SEC1 key.
    pub const UNCOMPRESSED_LEN: usize = 65;

    /// Wrap raw SEC1 key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Return the raw SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the key is in compressed form.
    pub fn is_compressed(&self) -> bool {
        self.0.len() == Self::COMPRESSED_LEN
    }
}

/// A recoverable ECDSA signature split into its RSV wire layout: two
/// 32-byte scalars plus a recovery identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// Recovery identifier, normalized to 0 or 1.
    pub v: u8,
}

impl RecoverableSignature {
    /// Wire length: r (32) + s (32) + v (1).
    pub const LEN: usize = 65;
}
