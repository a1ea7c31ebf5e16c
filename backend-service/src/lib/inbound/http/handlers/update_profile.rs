use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::logs::ports::LogEventStore;
use crate::domain::user::models::ProfilePatch;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial profile update (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileTarget {
    pub email: String,
}

pub async fn update_profile<US: UserStore, LS: LogEventStore>(
    State(state): State<AppState<US, LS>>,
    _principal: CurrentUser,
    Query(target): Query<ProfileTarget>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    let patch = ProfilePatch {
        username: req.username,
        fullname: req.fullname,
        password: req.password,
    };

    state
        .auth_service
        .update_profile(&target.email, patch)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub username: String,
    pub fullname: Option<String>,
    pub email: String,
    pub role: Option<String>,
}

impl From<&UserProfile> for ProfileResponseData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            fullname: profile.fullname.clone(),
            email: profile.email.clone(),
            role: profile.role.clone(),
        }
    }
}
