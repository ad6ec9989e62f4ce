use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Fixed token lifetime. The validity window is policy, not configuration.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Issuer written into every token this service signs.
pub const TOKEN_ISSUER: &str = "account-service";

/// Identity claims carried by an access token.
///
/// The claim set is fixed: who the token was issued to (`user_id`, `login`),
/// the validity window (`iat`, `nbf`, `exp`) and the issuing service. Apart
/// from tests, a value of this type only exists for an account that proved
/// its password, or as the output of verifying a presented token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Store-assigned account identifier
    pub user_id: i64,

    /// Login the account registered with
    pub login: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Build claims for a freshly authenticated account.
    ///
    /// The validity window opens now and closes [`TOKEN_TTL_HOURS`] later.
    pub fn new(user_id: i64, login: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        Self {
            user_id,
            login: login.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: TOKEN_ISSUER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_identity() {
        let claims = Claims::new(42, "alice");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.login, "alice");
        assert_eq!(claims.iss, TOKEN_ISSUER);
    }

    #[test]
    fn test_new_claims_validity_window() {
        let claims = Claims::new(1, "alice");

        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 60 * 60);
        assert_eq!(claims.nbf, claims.iat); // valid immediately
    }
}
