use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenCodec;
use backend_service::domain::logs::errors::LogEventError;
use backend_service::domain::logs::models::LogEvent;
use backend_service::domain::logs::ports::LogEventStore;
use backend_service::domain::logs::service::LogEventService;
use backend_service::domain::user::models::User;
use backend_service::domain::user::ports::UserStore;
use backend_service::domain::user::service::AuthService;
use backend_service::inbound::http::router::create_router;
use backend_service::user::errors::AuthError;
use chrono::Duration;
use serde_json::json;
use tokio::sync::RwLock;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory `UserStore`, keyed by email.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub async fn remove(&self, email: &str) {
        self.users.write().await.remove(email);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;
        // upsert keyed on id, like the relational adapter
        users.retain(|_, existing| existing.id != user.id);
        users.insert(user.email.as_str().to_owned(), user.clone());
        Ok(user)
    }
}

/// In-memory `LogEventStore`, retaining events for assertions.
#[derive(Default)]
pub struct InMemoryLogEventStore {
    events: RwLock<Vec<LogEvent>>,
}

impl InMemoryLogEventStore {
    pub async fn events(&self) -> Vec<LogEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl LogEventStore for InMemoryLogEventStore {
    async fn save(&self, event: LogEvent) -> Result<LogEvent, LogEventError> {
        self.events.write().await.push(event.clone());
        Ok(event)
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_codec: TokenCodec,
    pub user_store: Arc<InMemoryUserStore>,
    pub log_store: Arc<InMemoryLogEventStore>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_store = Arc::new(InMemoryUserStore::default());
        let log_store = Arc::new(InMemoryLogEventStore::default());
        let token_codec = Arc::new(TokenCodec::new(TEST_JWT_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_store),
            Arc::clone(&token_codec),
            Duration::hours(24),
        ));
        let log_service = Arc::new(LogEventService::new(Arc::clone(&log_store)));

        let router = create_router(auth_service, log_service, token_codec);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(TEST_JWT_SECRET),
            user_store,
            log_store,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Register a user through the public endpoint
    pub async fn register_user(&self, email: &str, password: &str) {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "username": "ronak",
                "fullname": "Ronak R",
                "email": email,
                "role": "user",
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "registration failed");
    }

    /// Log in through the public endpoint and return the issued token
    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("token missing from login response")
            .to_owned()
    }
}
