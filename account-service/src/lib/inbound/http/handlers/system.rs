use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiSuccess;

/// Plain-text index of the service surface.
pub async fn home() -> &'static str {
    "Welcome to the account service!\n\
     \n\
     Available endpoints:\n\
     GET  /          - this page\n\
     GET  /hello     - greeting, ?name= to address someone\n\
     GET  /health    - health check\n\
     POST /register  - register a new account\n\
     POST /login     - log in and receive an access token\n\
     GET  /user/me   - current account (requires bearer token)\n"
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelloParams {
    name: Option<String>,
}

pub async fn hello(Query(params): Query<HelloParams>) -> String {
    let name = params.name.unwrap_or_else(|| "World".to_string());
    format!("Hello, {}!", name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: String,
}

pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "healthy".to_string(),
        },
    )
}
