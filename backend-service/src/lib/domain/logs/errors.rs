use thiserror::Error;

/// Error for log-event persistence operations
#[derive(Debug, Clone, Error)]
pub enum LogEventError {
    #[error("Database error: {0}")]
    Database(String),
}
