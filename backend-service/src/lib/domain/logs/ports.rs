use async_trait::async_trait;

use crate::domain::logs::errors::LogEventError;
use crate::domain::logs::models::LogEvent;

/// Persistence for ingested log events.
#[async_trait]
pub trait LogEventStore: Send + Sync + 'static {
    /// Persist a log event.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn save(&self, event: LogEvent) -> Result<LogEvent, LogEventError>;
}
