use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Owns the hasher and the token handler so callers hold a single value; the
/// signing secret is injected once, at construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// The submitted password does not match the stored hash. Callers must
    /// not surface anything more specific than this.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator from the token signing secret.
    pub fn new(signing_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(signing_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against the stored hash and, on success, sign an
    /// access token for the account.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match
    /// * `Password` - the stored hash could not be read
    /// * `Token` - signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
        login: &str,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.jwt_handler.issue(user_id, login)?)
    }

    /// Verify a presented token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - token is malformed, forged, or outside its window
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.jwt_handler.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate(password, &hash, 42, "alice")
            .expect("Authentication failed");
        assert!(!token.is_empty());

        let claims = authenticator
            .verify_token(&token)
            .expect("Token verification failed");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.login, "alice");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 42, "alice");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_stored_hash() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.authenticate("my_password", "not-a-phc-string", 42, "alice");
        assert!(matches!(result, Err(AuthenticationError::Password(_))));
    }

    #[test]
    fn test_verify_invalid_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.verify_token("invalid.token.here");
        assert!(result.is_err());
    }
}
