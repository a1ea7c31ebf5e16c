use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::logs::errors::LogEventError;
use crate::domain::logs::models::IngestLogCommand;
use crate::domain::logs::models::LogEvent;
use crate::domain::logs::ports::LogEventStore;

/// Log ingestion service.
pub struct LogEventService<S>
where
    S: LogEventStore,
{
    store: Arc<S>,
}

impl<S> LogEventService<S>
where
    S: LogEventStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persist an ingested log event, stamping id and default timestamp.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    pub async fn save(&self, command: IngestLogCommand) -> Result<LogEvent, LogEventError> {
        let event = LogEvent {
            id: Uuid::new_v4(),
            timestamp: command.timestamp.unwrap_or_else(Utc::now),
            service_name: command.service_name,
            level: command.level,
            message: command.message,
            host: command.host,
        };

        let saved = self.store.save(event).await?;

        tracing::debug!(
            event_id = %saved.id,
            service_name = %saved.service_name,
            level = %saved.level,
            "Log event stored"
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestLogEventStore {}

        #[async_trait]
        impl LogEventStore for TestLogEventStore {
            async fn save(&self, event: LogEvent) -> Result<LogEvent, LogEventError>;
        }
    }

    #[tokio::test]
    async fn test_save_stamps_id_and_default_timestamp() {
        let mut store = MockTestLogEventStore::new();

        store
            .expect_save()
            .withf(|event| event.service_name == "payments" && event.level == "ERROR")
            .times(1)
            .returning(|event| Ok(event));

        let service = LogEventService::new(Arc::new(store));

        let before = Utc::now();
        let event = service
            .save(IngestLogCommand {
                timestamp: None,
                service_name: "payments".to_string(),
                level: "ERROR".to_string(),
                message: "boom".to_string(),
                host: None,
            })
            .await
            .expect("save failed");

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Utc::now());
    }

    #[tokio::test]
    async fn test_save_keeps_provided_timestamp() {
        let mut store = MockTestLogEventStore::new();

        store.expect_save().times(1).returning(|event| Ok(event));

        let service = LogEventService::new(Arc::new(store));

        let timestamp = Utc::now() - chrono::Duration::minutes(5);
        let event = service
            .save(IngestLogCommand {
                timestamp: Some(timestamp),
                service_name: "payments".to_string(),
                level: "INFO".to_string(),
                message: "settled".to_string(),
                host: Some("node-1".to_string()),
            })
            .await
            .expect("save failed");

        assert_eq!(event.timestamp, timestamp);
        assert_eq!(event.host.as_deref(), Some("node-1"));
    }
}
