use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .account_service
        .login(&body.login, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| ApiSuccess::new(StatusCode::OK, authenticated.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    login: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub id: i64,
    pub login: String,
    pub token: String,
}

impl From<&AuthenticatedAccount> for LoginResponseData {
    fn from(authenticated: &AuthenticatedAccount) -> Self {
        Self {
            id: authenticated.account.id.0,
            login: authenticated.account.login.as_str().to_string(),
            token: authenticated.token.clone(),
        }
    }
}
