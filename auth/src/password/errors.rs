use thiserror::Error;

/// Failures from the password hasher.
///
/// Both variants are internal faults. A password that simply does not match
/// its hash is reported as `Ok(false)` by verification, never as an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
