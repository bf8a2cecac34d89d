use thiserror::Error;

/// Terminal rejection reasons.
///
/// Verification is a single deterministic pass, so every variant is
/// local and non-retryable; each maps to one reason string in the
/// outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("missing field")]
    MissingInput,

    #[error("malformed public key")]
    MalformedPublicKey,

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("public key does not match address")]
    AddressMismatch,

    #[error("invalid signature")]
    SignatureInvalid,

    #[error("internal error: {0}")]
    Internal(String),
}
