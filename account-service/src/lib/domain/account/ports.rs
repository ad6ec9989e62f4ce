use async_trait::async_trait;
use auth::Claims;
use auth::TokenError;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::Login;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account from raw submitted credentials.
    ///
    /// Validates, hashes the password, and persists. Nothing is written when
    /// any step fails.
    ///
    /// # Errors
    /// * `InvalidLogin` / `InvalidPassword` - input failed validation
    /// * `AlreadyExists` - login is already taken
    /// * `Password` - hashing failed
    /// * `Database` - store operation failed
    async fn register(&self, login: &str, password: &str) -> Result<Account, AccountError>;

    /// Authenticate an account and sign an access token for it.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown login or wrong password, indistinguishably
    /// * `Password` / `Token` / `Database` - internal failure
    async fn login(
        &self,
        login: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, AccountError>;

    /// Verify a presented token and return its claims.
    ///
    /// Stateless: the token is self-contained, no store lookup is involved.
    ///
    /// # Errors
    /// * `TokenError` - token is malformed, forged, or outside its window
    fn verify_token(&self, token: &str) -> Result<Claims, TokenError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `NotFound` - account does not exist
    /// * `Database` - store operation failed
    async fn get_account(&self, id: AccountId) -> Result<Account, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// Login uniqueness lives behind [`create`](AccountRepository::create): the
/// insert and the uniqueness check must be one atomic operation in the
/// store, so two concurrent creates of the same login resolve to exactly one
/// success and one `AlreadyExists`. There is no check-then-insert.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account and return it with its store-assigned id.
    ///
    /// # Errors
    /// * `AlreadyExists` - another account holds this login
    /// * `Database` - store operation failed
    async fn create(&self, login: &Login, password_hash: &str) -> Result<Account, AccountError>;

    /// Retrieve an account by login.
    ///
    /// Takes the raw submitted string: lookups must not validate, so that a
    /// malformed login misses exactly like an unknown one.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError>;
}
