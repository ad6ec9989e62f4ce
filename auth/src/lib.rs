//! Authentication primitives for the account service
//!
//! Provides the credential and token machinery the HTTP service builds on:
//! - Password hashing (Argon2id, salted per call)
//! - Signed, time-bounded access tokens (HS256)
//! - An authenticator coordinating the two
//!
//! Nothing in here touches storage or HTTP. The service owns account records
//! and policy; this crate only answers "does this password match this hash"
//! and "is this token one of ours, inside its validity window".
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::JwtHandler;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue(1, "alice").unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.login, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and sign a token
//! let token = auth.authenticate("password123", &hash, 1, "alice").unwrap();
//!
//! // Later requests: verify the presented token
//! let claims = auth.verify_token(&token).unwrap();
//! assert_eq!(claims.user_id, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::claims::TOKEN_ISSUER;
pub use jwt::claims::TOKEN_TTL_HOURS;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
