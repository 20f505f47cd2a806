//! Store operations for ideas.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// An idea row. Wire keys keep the original camelCase for the definition
/// fields; columns are snake_case.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Idea {
    pub id: i64,
    pub user_id: i64,
    pub img: String,
    pub adj: String,
    #[serde(rename = "adjDef")]
    pub adj_def: String,
    pub noun: String,
    #[serde(rename = "nounDef")]
    pub noun_def: String,
    pub created: DateTime<Utc>,
}

/// Insert an idea for `user_id` with a server-set creation timestamp.
pub async fn create_idea(
    pool: &SqlitePool,
    user_id: i64,
    img: &str,
    adj: &str,
    adj_def: &str,
    noun: &str,
    noun_def: &str,
) -> Result<Idea, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Idea>(
        r#"
        INSERT INTO ideas (user_id, img, adj, adj_def, noun, noun_def, created)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, img, adj, adj_def, noun, noun_def, created
        "#,
    )
    .bind(user_id)
    .bind(img)
    .bind(adj)
    .bind(adj_def)
    .bind(noun)
    .bind(noun_def)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// List a user's ideas, newest first. The id tiebreak keeps ordering
/// stable when timestamps collide.
pub async fn list_ideas(pool: &SqlitePool, user_id: i64) -> Result<Vec<Idea>, sqlx::Error> {
    sqlx::query_as::<_, Idea>(
        r#"
        SELECT id, user_id, img, adj, adj_def, noun, noun_def, created
        FROM ideas
        WHERE user_id = ?
        ORDER BY created DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Delete an idea, scoped to its owner. Returns the number of rows
/// removed; deleting an id that does not exist (or belongs to someone
/// else) removes nothing.
pub async fn delete_idea(
    pool: &SqlitePool,
    user_id: i64,
    idea_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM ideas
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(idea_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
