use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserStore;
use crate::user::errors::AuthError;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    fullname: Option<String>,
    email: String,
    role: Option<String>,
    dob: Option<String>,
    gender: Option<String>,
    contact: Option<String>,
    country: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AuthError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            username: row.username,
            fullname: row.fullname,
            email: EmailAddress::new(row.email)?,
            role: row.role,
            dob: row.dob,
            gender: row.gender,
            contact: row.contact,
            country: row.country,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, fullname, email, role, dob, gender, contact,
                   country, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn save(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, fullname, email, role, dob, gender,
                               contact, country, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                fullname = EXCLUDED.fullname,
                email = EXCLUDED.email,
                role = EXCLUDED.role,
                dob = EXCLUDED.dob,
                gender = EXCLUDED.gender,
                contact = EXCLUDED.contact,
                country = EXCLUDED.country,
                password_hash = EXCLUDED.password_hash
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.fullname)
        .bind(user.email.as_str())
        .bind(&user.role)
        .bind(&user.dob)
        .bind(&user.gender)
        .bind(&user.contact)
        .bind(&user.country)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(user)
    }
}
