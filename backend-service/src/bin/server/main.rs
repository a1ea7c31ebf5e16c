use std::sync::Arc;

use auth::TokenCodec;
use backend_service::config::Config;
use backend_service::domain::logs::service::LogEventService;
use backend_service::domain::user::service::AuthService;
use backend_service::inbound::http::router::create_router;
use backend_service::outbound::repositories::PostgresLogEventStore;
use backend_service::outbound::repositories::PostgresUserStore;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "backend-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes()));
    let user_store = Arc::new(PostgresUserStore::new(pg_pool.clone()));
    let log_store = Arc::new(PostgresLogEventStore::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_store,
        Arc::clone(&token_codec),
        Duration::hours(config.jwt.expiration_hours),
    ));
    let log_service = Arc::new(LogEventService::new(log_store));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service, log_service, token_codec);
    axum::serve(http_listener, application).await?;

    Ok(())
}
