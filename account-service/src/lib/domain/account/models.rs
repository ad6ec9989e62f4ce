use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::LoginError;
use crate::account::errors::PasswordPolicyError;

/// Account aggregate entity.
///
/// Represents a registered account. `password_hash` is the opaque output of
/// the credential hasher; the raw password is never stored.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub login: Login,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// A login is accepted when it is not blank and its length is 3 to 50
/// characters. Whitespace is trimmed for the blank check only; the value
/// kept, compared, and stored is exactly what the caller submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid login.
    ///
    /// # Errors
    /// * `Required` - blank or whitespace-only
    /// * `TooShort` - fewer than 3 characters
    /// * `TooLong` - more than 50 characters
    pub fn new(login: String) -> Result<Self, LoginError> {
        if login.trim().is_empty() {
            return Err(LoginError::Required);
        }

        // Characters, not bytes: a multibyte login is as long as it reads
        let length = login.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(LoginError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(login))
    }

    /// Get login as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Password value type
///
/// A policy-checked raw secret on its way to the hasher. Never stored, and
/// deliberately not `Display`; `Debug` is redacted so the secret cannot leak
/// through logging.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;
    const MAX_LENGTH: usize = 100;

    /// Create a new policy-conforming password.
    ///
    /// # Errors
    /// * `Required` - blank or whitespace-only
    /// * `TooShort` - fewer than 6 characters
    /// * `TooLong` - more than 100 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.trim().is_empty() {
            return Err(PasswordPolicyError::Required);
        }

        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(password))
    }

    /// Get password as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Outcome of a successful login: the account and its freshly signed token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_length_boundaries() {
        assert!(matches!(
            Login::new("ab".to_string()),
            Err(LoginError::TooShort { min: 3, actual: 2 })
        ));
        assert!(Login::new("abc".to_string()).is_ok());
        assert!(Login::new("a".repeat(50)).is_ok());
        assert!(matches!(
            Login::new("a".repeat(51)),
            Err(LoginError::TooLong { max: 50, actual: 51 })
        ));
    }

    #[test]
    fn test_login_blank() {
        assert_eq!(Login::new(String::new()), Err(LoginError::Required));
        assert_eq!(Login::new("   ".to_string()), Err(LoginError::Required));
        assert_eq!(Login::new("\t\n".to_string()), Err(LoginError::Required));
    }

    #[test]
    fn test_login_preserves_surrounding_whitespace() {
        // Trimming is only for the blank check; the value is kept as-is
        let login = Login::new(" ali ".to_string()).unwrap();
        assert_eq!(login.as_str(), " ali ");
    }

    #[test]
    fn test_login_counts_characters_not_bytes() {
        // Three characters, six bytes
        assert!(Login::new("äöü".to_string()).is_ok());
        assert!(matches!(
            Login::new("äö".to_string()),
            Err(LoginError::TooShort { actual: 2, .. })
        ));
    }

    #[test]
    fn test_password_length_boundaries() {
        assert!(matches!(
            Password::new("12345".to_string()),
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        ));
        assert!(Password::new("123456".to_string()).is_ok());
        assert!(Password::new("a".repeat(100)).is_ok());
        assert!(matches!(
            Password::new("a".repeat(101)),
            Err(PasswordPolicyError::TooLong {
                max: 100,
                actual: 101
            })
        ));
    }

    #[test]
    fn test_password_blank() {
        assert!(matches!(
            Password::new(String::new()),
            Err(PasswordPolicyError::Required)
        ));
        assert!(matches!(
            Password::new("      ".to_string()),
            Err(PasswordPolicyError::Required)
        ));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("super_secret".to_string()).unwrap();
        let printed = format!("{:?}", password);

        assert_eq!(printed, "Password(<redacted>)");
        assert!(!printed.contains("super_secret"));
    }
}
