use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures never reach clients as distinct reasons; the
/// variants exist for internal diagnostics.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature mismatch")]
    SignatureMismatch,

    #[error("Token is expired")]
    Expired,
}
