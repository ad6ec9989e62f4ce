use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::account::models::AccountId;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified caller identity in request extensions
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account_id: AccountId,
    pub login: String,
}

/// Middleware that verifies bearer tokens and exposes the caller identity.
///
/// The precise rejection reason (expired, forged, malformed, wrong
/// algorithm) is logged and then collapsed into one generic 401, so the
/// response never tells a caller why their token was refused.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.account_service.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid or expired token"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(CurrentAccount {
        account_id: AccountId(claims.user_id),
        login: claims.login,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Missing Authorization header"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
