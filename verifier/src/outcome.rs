//! The verdict returned for every request.

use crate::error::VerifyError;
use serde::{Deserialize, Serialize};

/// The decision for one request: a validity flag plus a short reason.
///
/// Constructed fresh per request; the core never caches or shares
/// outcomes between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub valid: bool,
    pub reason: String,
}

impl VerificationOutcome {
    /// The outcome for a signature that checked out.
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: "valid signature".to_string(),
        }
    }

    /// The outcome for a terminal rejection.
    pub fn rejected(error: &VerifyError) -> Self {
        Self {
            valid: false,
            reason: error.to_string(),
        }
    }
}
