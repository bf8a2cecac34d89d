//! Cryptographic primitives for Stacks message-signature verification.
//!
//! - **SHA-256 / RIPEMD-160** for message digests, hash160, and checksums
//! - **secp256k1** (via `k256`) for public-key recovery and ECDSA verification
//! - c32check address derivation with `S` prefix, version byte, and checksum

pub mod address;
pub mod c32;
pub mod hash;
pub mod keys;
pub mod message;
pub mod recover;

pub use address::{derive_address, parse_address, AddressError};
pub use hash::{address_checksum, hash160, sha256, sha256d};
pub use keys::{compress_public_key, parse_public_key, KeyError};
pub use message::{encode_message, message_digest, MESSAGE_PREFIX};
pub use recover::{parse_signature, recover_public_key, verify_signature, SignatureError};
