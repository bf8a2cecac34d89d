//! Fundamental types for Stacks message-signature verification.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: networks, addresses, keys, signatures, and hash outputs.

pub mod address;
pub mod hash;
pub mod keys;
pub mod network;

pub use address::AccountAddress;
pub use hash::{Hash160, MessageDigest};
pub use keys::{PublicKey, RecoverableSignature};
pub use network::Network;
