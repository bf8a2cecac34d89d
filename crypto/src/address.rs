//! c32check address derivation and parsing.
//!
//! Address layout: `S` + version character + c32(hash160 + checksum),
//! where the checksum is the first 4 bytes of the double SHA-256 over
//! the version byte followed by the hash160.

use crate::c32;
use crate::hash::{address_checksum, hash160};
use stacksig_types::{AccountAddress, Hash160, Network, PublicKey};
use thiserror::Error;

/// Decoded payload length: 20-byte hash160 plus 4-byte checksum.
const PAYLOAD_LEN: usize = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address does not start with 'S'")]
    MissingPrefix,

    #[error("address payload has the wrong length")]
    BadLength,

    #[error("address contains a character outside the c32 alphabet")]
    InvalidCharacter,

    #[error("address checksum mismatch")]
    BadChecksum,

    #[error("unknown address version {0}")]
    UnknownVersion(u8),
}

/// Derive the single-signature account address for a public key.
///
/// The key bytes are hashed exactly as supplied, so a compressed and an
/// uncompressed encoding of the same point derive different addresses.
pub fn derive_address(public_key: &PublicKey, network: Network) -> AccountAddress {
    let hash = hash160(public_key.as_bytes());
    let version = network.single_sig_version();
    let checksum = address_checksum(version, hash.as_bytes());

    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.extend_from_slice(hash.as_bytes());
    payload.extend_from_slice(&checksum);

    let address = format!(
        "{}{}{}",
        AccountAddress::PREFIX,
        c32::digit(version),
        c32::encode(&payload)
    );
    AccountAddress::new(address)
}

/// Parse an address back into its network and hash160 payload.
///
/// Accepts both version families (single-signature and multi-signature)
/// of both networks; any other version byte is rejected.
pub fn parse_address(text: &str) -> Result<(Network, Hash160), AddressError> {
    let mut chars = text.chars();
    match chars.next() {
        Some('S') | Some('s') => {}
        _ => return Err(AddressError::MissingPrefix),
    }
    let version_char = chars.next().ok_or(AddressError::BadLength)?;
    let version = c32::value(version_char).ok_or(AddressError::InvalidCharacter)?;

    let payload = c32::decode(chars.as_str()).ok_or(AddressError::InvalidCharacter)?;
    if payload.len() != PAYLOAD_LEN {
        return Err(AddressError::BadLength);
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[..20]);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&payload[20..]);

    if checksum != address_checksum(version, &hash) {
        return Err(AddressError::BadChecksum);
    }
    let network = Network::from_version(version).ok_or(AddressError::UnknownVersion(version))?;
    Ok((network, Hash160::new(hash)))
}
