//! SHA-256 family hashing for digests, key hashes, and checksums.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use stacksig_types::Hash160;

/// Compute a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a double SHA-256 hash.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Two-stage key hash: RIPEMD-160 over SHA-256 of the input.
///
/// Compresses a public key into the 20-byte payload of an account address.
pub fn hash160(data: &[u8]) -> Hash160 {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    Hash160::new(output)
}

/// Address checksum: the first four bytes of the double SHA-256 over
/// `version` followed by `payload`.
pub fn address_checksum(version: u8, payload: &[u8]) -> [u8; 4] {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);
    let hash = sha256d(&data);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&hash[..4]);
    checksum
}
