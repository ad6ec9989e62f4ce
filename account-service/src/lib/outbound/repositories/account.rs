use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Login;
use crate::domain::account::ports::AccountRepository;

/// SQLite-backed account store.
///
/// The `UNIQUE` index on `accounts.login` is what makes `create` atomic: the
/// insert either lands or comes back as a unique violation, with no window
/// between a check and a write.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Row shape shared by the account queries.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    login: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            login: Login::new(row.login)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, login: &Login, password_hash: &str) -> Result<Account, AccountError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO accounts (login, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(login.as_str())
        .bind(password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::AlreadyExists(login.as_str().to_string());
                }
            }
            AccountError::Database(e.to_string())
        })?;

        Ok(Account {
            id: AccountId(result.last_insert_rowid()),
            login: login.clone(),
            password_hash: password_hash.to_string(),
            created_at,
        })
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, login, password_hash, created_at
            FROM accounts
            WHERE login = ?1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, login, password_hash, created_at
            FROM accounts
            WHERE id = ?1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }
}
