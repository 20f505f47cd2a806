//! User records and store operations.
//!
//! The store exclusively owns user rows. Ids are assigned by SQLite
//! (`INTEGER PRIMARY KEY AUTOINCREMENT`) and never change. Emails are
//! compared byte-for-byte, with no case normalization, and the schema's UNIQUE
//! constraint enforces one row per email independently of any service-level
//! check.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// A user row. `password_hash` is deliberately excluded from serialization;
/// this struct must never reach a response body with the hash attached.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Insert a new user with the default role.
///
/// A unique-constraint violation on `email` propagates as `sqlx::Error`;
/// the error conversion layer maps it to the duplicate-email conflict.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash, role, created_at)
        VALUES (?, ?, ?, 'user', ?)
        RETURNING id, email, name, password_hash, role, created_at
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up a user by email (exact match).
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, role, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, role, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
