use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::ProfilePatch;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::user::errors::AuthError;
use crate::user::ports::UserStore;

/// Authentication domain service.
///
/// Orchestrates credential verification against the store and token issuance.
/// Login is read-only; the only write paths are registration and profile
/// updates, both of which hash any new secret before persisting.
pub struct AuthService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
    token_ttl: Duration,
}

impl<S> AuthService<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, token_codec: Arc<TokenCodec>, token_ttl: Duration) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_codec,
            token_ttl,
        }
    }

    /// Verify credentials and issue a bearer token for the identifier.
    ///
    /// Unknown identifier and password mismatch both surface as
    /// `InvalidCredentials`; the distinction is an internal diagnostic only.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or password mismatch
    /// * `Token` - Token issuance failed
    /// * `Database` - Store lookup failed
    pub async fn login(&self, email: &EmailAddress, password: &str) -> Result<String, AuthError> {
        let user = match self.store.find_by_email(email.as_str()).await? {
            Some(user) => user,
            None => {
                tracing::debug!(email = %email, "login rejected: unknown identifier");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::debug!(email = %email, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(user.email.as_str(), self.token_ttl)?)
    }

    /// Register a new user, hashing the password before it is stored.
    ///
    /// # Errors
    /// * `Password` - Password hashing failed
    /// * `Database` - Store operation failed
    pub async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: Uuid::new_v4(),
            username: command.username,
            fullname: command.fullname,
            email: command.email,
            role: command.role,
            dob: command.dob,
            gender: command.gender,
            contact: command.contact,
            country: command.country,
            password_hash,
            created_at: Utc::now(),
        };

        self.store.save(user).await
    }

    /// Read-only projection of the user bound to `email`.
    ///
    /// # Errors
    /// * `UserNotFound` - Identifier absent from the store
    /// * `Database` - Store lookup failed
    pub async fn current_user(&self, email: &str) -> Result<UserProfile, AuthError> {
        self.store
            .find_by_email(email)
            .await?
            .map(|ref user| UserProfile::from(user))
            .ok_or_else(|| AuthError::UserNotFound(email.to_owned()))
    }

    /// Apply a partial profile update, re-hashing a replaced password.
    ///
    /// # Errors
    /// * `UserNotFound` - Identifier absent from the store
    /// * `Password` - Password hashing failed
    /// * `Database` - Store operation failed
    pub async fn update_profile(
        &self,
        email: &str,
        patch: ProfilePatch,
    ) -> Result<UserProfile, AuthError> {
        let mut user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.to_owned()))?;

        if let Some(username) = patch.username {
            user.username = username;
        }

        if let Some(fullname) = patch.fullname {
            user.fullname = Some(fullname);
        }

        if let Some(password) = patch.password {
            user.password_hash = self.password_hasher.hash(&password)?;
        }

        let saved = self.store.save(user).await?;

        Ok(UserProfile::from(&saved))
    }
}
