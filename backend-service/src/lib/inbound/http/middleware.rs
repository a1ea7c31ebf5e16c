use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::logs::ports::LogEventStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

/// Authenticated principal bound to the current request.
///
/// Constructed fresh per request by the authentication filter and scoped to
/// that request's extensions; never shared across requests or stored.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub subject: String,
    pub authorities: Vec<String>,
}

/// Bearer-token authentication filter, layered over every route.
///
/// This filter never rejects a request: a missing, malformed, expired, or
/// tampered token leaves the request unauthenticated and route-level policy
/// decides whether that is acceptable. A verified token whose subject still
/// resolves in the store binds a [`CurrentUser`] into the request extensions
/// for the remainder of processing. An already-established principal is never
/// overwritten, so the filter is idempotent under re-entrant layering.
pub async fn authenticate<US: UserStore, LS: LogEventStore>(
    State(state): State<AppState<US, LS>>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.extensions().get::<CurrentUser>().is_some() {
        return next.run(req).await;
    }

    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        return next.run(req).await;
    };

    let claims = match state.token_codec.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "discarding bearer token");
            return next.run(req).await;
        }
    };

    // A structurally valid token is not enough: the subject must still exist.
    match state.auth_service.current_user(&claims.sub).await {
        Ok(profile) => {
            req.extensions_mut().insert(CurrentUser {
                subject: profile.email,
                authorities: Vec::new(),
            });
        }
        Err(AuthError::UserNotFound(_)) => {
            tracing::debug!(subject = %claims.sub, "token subject no longer resolvable");
        }
        Err(e) => {
            tracing::error!(error = %e, "user lookup failed during authentication");
        }
    }

    next.run(req).await
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Route-level authentication gate.
///
/// Extracting `CurrentUser` in a handler rejects with 401 when the filter
/// bound no principal to the request.
#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
