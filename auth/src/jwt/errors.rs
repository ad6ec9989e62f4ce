use thiserror::Error;

/// Failures when issuing or verifying access tokens.
///
/// The verification variants are deliberately distinct so callers can log
/// the precise rejection reason; HTTP surfaces collapse all of them into a
/// single generic unauthenticated response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,
}
