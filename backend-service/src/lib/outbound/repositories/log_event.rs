use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::logs::errors::LogEventError;
use crate::domain::logs::models::LogEvent;
use crate::domain::logs::ports::LogEventStore;

pub struct PostgresLogEventStore {
    pool: PgPool,
}

impl PostgresLogEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogEventStore for PostgresLogEventStore {
    async fn save(&self, event: LogEvent) -> Result<LogEvent, LogEventError> {
        sqlx::query(
            r#"
            INSERT INTO log_events (id, timestamp, service_name, level, message, host)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id)
        .bind(event.timestamp)
        .bind(&event.service_name)
        .bind(&event.level)
        .bind(&event.message)
        .bind(&event.host)
        .execute(&self.pool)
        .await
        .map_err(|e| LogEventError::Database(e.to_string()))?;

        Ok(event)
    }
}
