use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Application log event ingested from other services.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub service_name: String,
    pub level: String,
    pub message: String,
    pub host: Option<String>,
}

/// Command to ingest a log event.
///
/// A missing timestamp defaults to the time of receipt.
#[derive(Debug)]
pub struct IngestLogCommand {
    pub timestamp: Option<DateTime<Utc>>,
    pub service_name: String,
    pub level: String,
    pub message: String,
    pub host: Option<String>,
}
