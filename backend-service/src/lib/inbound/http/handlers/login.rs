use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::logs::ports::LogEventStore;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

pub async fn login<US: UserStore, LS: LogEventStore>(
    State(state): State<AppState<US, LS>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An unparsable identifier gets the same opaque rejection as a bad
    // password; nothing here may reveal whether the account exists.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let token = state
        .auth_service
        .login(&email, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
