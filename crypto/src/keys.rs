//! SEC1 public-key parsing and validation.

use k256::ecdsa::VerifyingKey;
use stacksig_types::PublicKey;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("public key must be 33 or 65 bytes, got {0}")]
    BadLength(usize),

    #[error("public key does not decode to a point on the curve")]
    NotOnCurve,
}

/// Parse raw SEC1 bytes into a validated public key.
///
/// The bytes must decode to a point on secp256k1; the original encoding
/// (compressed or uncompressed) is preserved.
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, KeyError> {
    if bytes.len() != PublicKey::COMPRESSED_LEN && bytes.len() != PublicKey::UNCOMPRESSED_LEN {
        return Err(KeyError::BadLength(bytes.len()));
    }
    VerifyingKey::from_sec1_bytes(bytes).map_err(|_| KeyError::NotOnCurve)?;
    Ok(PublicKey::new(bytes.to_vec()))
}

/// Re-encode a public key in compressed SEC1 form.
///
/// Recovery always yields a compressed key, so comparisons against
/// caller-supplied material go through this canonical form.
pub fn compress_public_key(key: &PublicKey) -> Result<PublicKey, KeyError> {
    let verifying = VerifyingKey::from_sec1_bytes(key.as_bytes()).map_err(|_| KeyError::NotOnCurve)?;
    let point = verifying.to_encoded_point(true);
    Ok(PublicKey::new(point.as_bytes().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;

    fn random_point(compressed: bool) -> Vec<u8> {
        let signing = SigningKey::random(&mut rand::thread_rng());
        signing
            .verifying_key()
            .to_encoded_point(compressed)
            .as_bytes()
            .to_vec()
    }

    #[test]
    fn compressed_key_parses() {
        let bytes = random_point(true);
        let key = parse_public_key(&bytes).unwrap();
        assert!(key.is_compressed());
        assert_eq!(key.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn uncompressed_key_parses() {
        let bytes = random_point(false);
        let key = parse_public_key(&bytes).unwrap();
        assert!(!key.is_compressed());
        assert_eq!(key.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(parse_public_key(&[]), Err(KeyError::BadLength(0)));
        assert_eq!(parse_public_key(&[0x02; 32]), Err(KeyError::BadLength(32)));
        assert_eq!(parse_public_key(&[0x04; 66]), Err(KeyError::BadLength(66)));
    }

    #[test]
    fn off_curve_point_rejected() {
        // 0x02 followed by an x-coordinate with no matching y.
        let mut bytes = vec![0x02u8];
        bytes.extend_from_slice(&[0xFF; 32]);
        assert_eq!(parse_public_key(&bytes), Err(KeyError::NotOnCurve));
    }

    #[test]
    fn compress_preserves_point() {
        let uncompressed = random_point(false);
        let key = parse_public_key(&uncompressed).unwrap();
        let compressed = compress_public_key(&key).unwrap();
        assert!(compressed.is_compressed());
        // x-coordinate unchanged
        assert_eq!(compressed.as_bytes()[1..33], uncompressed[1..33]);
    }

    #[test]
    fn compress_is_identity_for_compressed_keys() {
        let bytes = random_point(true);
        let key = parse_public_key(&bytes).unwrap();
        assert_eq!(compress_public_key(&key).unwrap(), key);
    }
}
