use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Account;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::middleware::CurrentAccount;
use crate::inbound::http::router::AppState;

/// Identity endpoint for the bearer of a valid token.
///
/// The claims already carry id and login, but the record is re-read so a
/// token for a deleted account answers 404 instead of echoing stale claims.
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    state
        .account_service
        .get_account(current.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub id: i64,
    pub login: String,
}

impl From<&Account> for MeResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            login: account.login.as_str().to_string(),
        }
    }
}
