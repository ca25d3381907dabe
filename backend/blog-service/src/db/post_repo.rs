/// Post repository - handles all database operations for posts
use crate::models::Post;
use sqlx::PgPool;

/// Create a new post, optionally linked to its author.
/// Returns the created post with its server-assigned identifier.
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    body: &str,
    author_id: Option<i32>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, body, author_id)
        VALUES ($1, $2, $3)
        RETURNING uuid AS id, title, body, author_id
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Find a post by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT uuid AS id, title, body, author_id
        FROM posts
        WHERE uuid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all posts in insertion order
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT uuid AS id, title, body, author_id
        FROM posts
        ORDER BY uuid
        "#,
    )
    .fetch_all(pool)
    .await
}

/// List all posts authored by a user, in insertion order
pub async fn find_by_author(pool: &PgPool, author_id: i32) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT uuid AS id, title, body, author_id
        FROM posts
        WHERE author_id = $1
        ORDER BY uuid
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await
}
