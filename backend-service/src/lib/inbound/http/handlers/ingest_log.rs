use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::logs::models::IngestLogCommand;
use crate::domain::logs::ports::LogEventStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn ingest_log<US: UserStore, LS: LogEventStore>(
    State(state): State<AppState<US, LS>>,
    _principal: CurrentUser,
    Json(body): Json<IngestLogRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let command = IngestLogCommand {
        timestamp: body.timestamp,
        service_name: body.service_name,
        level: body.level,
        message: body.message,
        host: body.host,
    };

    state
        .log_service
        .save(command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, ()))
}

/// HTTP request body for log ingestion (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngestLogRequestBody {
    pub timestamp: Option<DateTime<Utc>>,
    pub service_name: String,
    pub level: String,
    pub message: String,
    pub host: Option<String>,
}
