//! ECDSA public-key recovery and verification over secp256k1.
//!
//! Curve arithmetic stays inside `k256`; this module only enforces the
//! RSV wire layout, scalar ranges, the low-s canonical form, and the
//! recovery-id convention.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use stacksig_types::{MessageDigest, PublicKey, RecoverableSignature};
use thiserror::Error;

/// secp256k1 curve order n, big-endian.
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("malformed signature: {0}")]
    Malformed(&'static str),

    #[error("signature does not recover to a valid public key")]
    NotRecoverable,
}

/// Parse a 65-byte RSV wire signature.
///
/// The recovery id is accepted as 0/1 or with the legacy +27 offset and
/// stored normalized. Scalars must be non-zero and below the curve order.
pub fn parse_signature(bytes: &[u8]) -> Result<RecoverableSignature, SignatureError> {
    if bytes.len() != RecoverableSignature::LEN {
        return Err(SignatureError::Malformed("expected 65 bytes"));
    }

    let mut r = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    let mut s = [0u8; 32];
    s.copy_from_slice(&bytes[32..64]);

    if r == [0u8; 32] || s == [0u8; 32] {
        return Err(SignatureError::Malformed("zero scalar"));
    }
    if r >= SECP256K1_ORDER || s >= SECP256K1_ORDER {
        return Err(SignatureError::Malformed("scalar exceeds curve order"));
    }

    let v = match bytes[64] {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::Malformed("bad recovery id")),
    };

    Ok(RecoverableSignature { r, s, v })
}

/// Recover the public key that produced a signature over a digest.
///
/// High-s signatures are rejected: the signing side normalizes to the
/// low half of the curve order, so a high s can only be a malleated copy.
/// The recovered key is returned in compressed form.
pub fn recover_public_key(
    digest: &MessageDigest,
    signature: &RecoverableSignature,
) -> Result<PublicKey, SignatureError> {
    let sig = to_k256(signature)?;
    if sig.normalize_s().is_some() {
        return Err(SignatureError::NotRecoverable);
    }
    let recovery_id =
        RecoveryId::from_byte(signature.v).ok_or(SignatureError::Malformed("bad recovery id"))?;

    let recovered = VerifyingKey::recover_from_prehash(digest.as_bytes(), &sig, recovery_id)
        .map_err(|_| SignatureError::NotRecoverable)?;
    let point = recovered.to_encoded_point(true);
    Ok(PublicKey::new(point.as_bytes().to_vec()))
}

/// Verify a signature against a digest and caller-supplied key material,
/// independent of recovery.
///
/// Returns `false` on any parse or verification failure, never an error.
pub fn verify_signature(
    digest: &MessageDigest,
    signature: &RecoverableSignature,
    public_key: &PublicKey,
) -> bool {
    let Ok(sig) = to_k256(signature) else {
        return false;
    };
    let Ok(verifying) = VerifyingKey::from_sec1_bytes(public_key.as_bytes()) else {
        return false;
    };
    verifying.verify_prehash(digest.as_bytes(), &sig).is_ok()
}

fn to_k256(signature: &RecoverableSignature) -> Result<Signature, SignatureError> {
    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(&signature.r);
    bytes[32..].copy_from_slice(&signature.s);
    Signature::from_slice(&bytes).map_err(|_| SignatureError::Malformed("scalar out of range"))
}
