use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::handlers::system::health;
use super::handlers::system::hello;
use super::handlers::system::home;
use super::middleware::require_bearer_token;
use crate::domain::account::service::AccountService;
use crate::outbound::repositories::SqliteAccountRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<SqliteAccountRepository>>,
}

pub fn create_router(account_service: Arc<AccountService<SqliteAccountRepository>>) -> Router {
    let state = AppState { account_service };

    let public_routes = Router::new()
        .route("/", get(home))
        .route("/hello", get(hello))
        .route("/health", get(health))
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/user/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ));

    // Headers stay out of the span: Authorization must never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
