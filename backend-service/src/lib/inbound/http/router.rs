use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_user::current_user;
use super::handlers::ingest_log::ingest_log;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_profile::update_profile;
use super::middleware::authenticate as auth_middleware;
use crate::domain::logs::ports::LogEventStore;
use crate::domain::logs::service::LogEventService;
use crate::domain::user::ports::UserStore;
use crate::domain::user::service::AuthService;

/// Shared application state.
///
/// Generic over the store ports so any `UserStore`/`LogEventStore`
/// implementation can be wired in. Everything here is read-mostly and shared
/// across concurrent requests via `Arc`.
pub struct AppState<US, LS>
where
    US: UserStore,
    LS: LogEventStore,
{
    pub auth_service: Arc<AuthService<US>>,
    pub log_service: Arc<LogEventService<LS>>,
    pub token_codec: Arc<TokenCodec>,
}

impl<US, LS> Clone for AppState<US, LS>
where
    US: UserStore,
    LS: LogEventStore,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            log_service: Arc::clone(&self.log_service),
            token_codec: Arc::clone(&self.token_codec),
        }
    }
}

pub fn create_router<US, LS>(
    auth_service: Arc<AuthService<US>>,
    log_service: Arc<LogEventService<LS>>,
    token_codec: Arc<TokenCodec>,
) -> Router
where
    US: UserStore,
    LS: LogEventStore,
{
    let state = AppState {
        auth_service,
        log_service,
        token_codec,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login::<US, LS>))
        .route("/api/auth/register", post(register::<US, LS>));

    // Protection happens at the handler via the CurrentUser extractor; the
    // authentication filter itself runs for every route and never rejects.
    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_user::<US, LS>))
        .route("/api/auth/profile", put(update_profile::<US, LS>))
        .route("/api/logs/add", post(ingest_log::<US, LS>));

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
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<US, LS>,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
