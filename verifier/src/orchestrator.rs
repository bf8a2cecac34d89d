//! The single-pass verification decision.
//!
//! Linear pipeline: presence check, network resolution, public-key
//! parse, address comparison, digest computation, then the signature
//! checks. No step is retried and every path terminates in exactly one
//! outcome; no failure escapes as a panic or error.

use crate::error::VerifyError;
use crate::outcome::VerificationOutcome;
use crate::request::VerificationRequest;
use crate::resolver;
use stacksig_crypto::{
    compress_public_key, derive_address, message_digest, parse_public_key, parse_signature,
    recover_public_key, verify_signature, SignatureError,
};

/// Verify one request, returning the verdict.
///
/// Pure and stateless: identical requests always produce identical
/// outcomes, and concurrent calls need no coordination.
pub fn verify(request: &VerificationRequest) -> VerificationOutcome {
    match run(request) {
        Ok(()) => VerificationOutcome::accepted(),
        Err(error) => {
            tracing::debug!(reason = %error, "verification rejected");
            VerificationOutcome::rejected(&error)
        }
    }
}

fn run(request: &VerificationRequest) -> Result<(), VerifyError> {
    if request.address.is_empty()
        || request.message.is_empty()
        || request.signature.is_empty()
        || request.public_key.is_empty()
    {
        return Err(VerifyError::MissingInput);
    }

    let network = resolver::resolve(request.network, &request.address);

    let key_bytes = decode_hex(&request.public_key).ok_or(VerifyError::MalformedPublicKey)?;
    let public_key = parse_public_key(&key_bytes).map_err(|_| VerifyError::MalformedPublicKey)?;

    let derived = derive_address(&public_key, network);
    if derived.as_str() != request.address {
        return Err(VerifyError::AddressMismatch);
    }

    let digest = message_digest(&request.message);

    let sig_bytes = decode_hex(&request.signature)
        .ok_or_else(|| VerifyError::MalformedSignature("not valid hex".to_string()))?;
    let signature = parse_signature(&sig_bytes).map_err(signature_error)?;

    let recovered = recover_public_key(&digest, &signature).map_err(signature_error)?;

    // The recovered key must be the caller-supplied one: a signature
    // valid under some other key is a spoofed-key attempt.
    let supplied =
        compress_public_key(&public_key).map_err(|error| VerifyError::Internal(error.to_string()))?;
    if recovered != supplied {
        return Err(VerifyError::SignatureInvalid);
    }

    if !verify_signature(&digest, &signature, &public_key) {
        return Err(VerifyError::SignatureInvalid);
    }

    Ok(())
}

fn signature_error(error: SignatureError) -> VerifyError {
    match error {
        SignatureError::Malformed(detail) => VerifyError::MalformedSignature(detail.to_string()),
        SignatureError::NotRecoverable => VerifyError::SignatureInvalid,
    }
}

/// Hex-decode an externally supplied field, tolerating an optional `0x`
/// prefix.
fn decode_hex(text: &str) -> Option<Vec<u8>> {
    let stripped = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    hex::decode(stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(address: &str, message: &str, signature: &str, public_key: &str) -> VerificationRequest {
        VerificationRequest {
            address: address.to_string(),
            message: message.to_string(),
            signature: signature.to_string(),
            public_key: public_key.to_string(),
            network: None,
        }
    }

    #[test]
    fn empty_fields_rejected_before_any_parsing() {
        for missing in 0..4 {
            let mut req = request("SP000", "hello", "aa", "bb");
            match missing {
                0 => req.address.clear(),
                1 => req.message.clear(),
                2 => req.signature.clear(),
                _ => req.public_key.clear(),
            }
            let outcome = verify(&req);
            assert!(!outcome.valid);
            assert_eq!(outcome.reason, "missing field");
        }
    }

    #[test]
    fn non_hex_public_key_rejected() {
        let outcome = verify(&request("SP000", "hello", "aa", "zz-not-hex"));
        assert_eq!(outcome.reason, "malformed public key");
    }

    #[test]
    fn wrong_length_public_key_rejected() {
        let outcome = verify(&request("SP000", "hello", "aa", "0102"));
        assert_eq!(outcome.reason, "malformed public key");
    }

    #[test]
    fn decode_hex_strips_prefix() {
        assert_eq!(decode_hex("0x0102"), Some(vec![1, 2]));
        assert_eq!(decode_hex("0X0102"), Some(vec![1, 2]));
        assert_eq!(decode_hex("0102"), Some(vec![1, 2]));
        assert_eq!(decode_hex("xyz"), None);
    }
}
