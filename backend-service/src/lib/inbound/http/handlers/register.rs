use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::logs::ports::LogEventStore;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;

pub async fn register<US: UserStore, LS: LogEventStore>(
    State(state): State<AppState<US, LS>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, ()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    fullname: Option<String>,
    email: String,
    role: Option<String>,
    dob: Option<String>,
    gender: Option<String>,
    contact: Option<String>,
    country: Option<String>,
    password: String,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let email = EmailAddress::new(self.email)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(RegisterUserCommand {
            username: self.username,
            fullname: self.fullname,
            email,
            role: self.role,
            dob: self.dob,
            gender: self.gender,
            contact: self.contact,
            country: self.country,
            password: self.password,
        })
    }
}
