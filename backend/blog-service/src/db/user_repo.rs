/// User repository - handles all database operations for users
use crate::models::User;
use sqlx::PgPool;

/// Insert a new user unless the username is already taken.
///
/// Returns `Some(user)` when a row was inserted, `None` when an existing
/// user already holds the username (the insert is a silent no-op). The
/// unique constraint on `users.username` arbitrates concurrent calls, so
/// two racing inserts can never both succeed.
pub async fn create_user(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username)
        VALUES ($1)
        ON CONFLICT (username) DO NOTHING
        RETURNING uuid AS id, username
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT uuid AS id, username
        FROM users
        WHERE uuid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by exact username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT uuid AS id, username
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// List all users in insertion order
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT uuid AS id, username
        FROM users
        ORDER BY uuid
        "#,
    )
    .fetch_all(pool)
    .await
}
