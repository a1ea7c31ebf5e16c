use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::logs::ports::LogEventStore;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn current_user<US: UserStore, LS: LogEventStore>(
    State(state): State<AppState<US, LS>>,
    principal: CurrentUser,
) -> Result<ApiSuccess<CurrentUserResponseData>, ApiError> {
    state
        .auth_service
        .current_user(&principal.subject)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub username: String,
    pub fullname: Option<String>,
    pub email: String,
    pub role: Option<String>,
}

impl From<&UserProfile> for CurrentUserResponseData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            fullname: profile.fullname.clone(),
            email: profile.email.clone(),
            role: profile.role.clone(),
        }
    }
}
