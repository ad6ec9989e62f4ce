use thiserror::Error;

/// Error for Login validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Login is required")]
    Required,

    #[error("Login too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Login too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password is required")]
    Required,

    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Input validation errors (automatically converted via #[from])
    #[error("Invalid login: {0}")]
    InvalidLogin(#[from] LoginError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("Account already exists with login: {0}")]
    AlreadyExists(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    /// Unknown login and wrong password collapse into this one variant so
    /// the outcome never reveals which logins exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<auth::AuthenticationError> for AccountError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
            auth::AuthenticationError::Password(e) => AccountError::Password(e),
            auth::AuthenticationError::Token(e) => AccountError::Token(e),
        }
    }
}
