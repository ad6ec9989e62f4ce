use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::TokenError;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::Login;
use crate::domain::account::models::Password;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Holds no per-request state: every call composes the validators, the
/// hasher, the store, and the token handler, then returns. Calls may
/// interleave arbitrarily; the store's unique index provides the only
/// atomicity registration needs.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Authenticator,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing and token signing, carrying the
    ///   signing secret
    pub fn new(repository: Arc<R>, authenticator: Authenticator) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, login: &str, password: &str) -> Result<Account, AccountError> {
        // Validate before hashing (hashing is costly) and before any store
        // access (no partial side effects on rejected input)
        let login = Login::new(login.to_string())?;
        let password = Password::new(password.to_string())?;

        let password_hash = self.authenticator.hash_password(password.as_str())?;

        let account = self.repository.create(&login, &password_hash).await?;

        tracing::info!(
            account_id = %account.id,
            login = %account.login,
            "Account registered"
        );

        Ok(account)
    }

    async fn login(
        &self,
        login: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, AccountError> {
        // Raw login string: an unknown login must fail exactly like a wrong
        // password, so no validation happens on this path
        let account = self
            .repository
            .find_by_login(login)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let token = self.authenticator.authenticate(
            password,
            &account.password_hash,
            account.id.0,
            account.login.as_str(),
        )?;

        Ok(AuthenticatedAccount { account, token })
    }

    fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.authenticator.verify_token(token)
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}
