//! User schema and resolvers

use async_graphql::{
    ComplexObject, Context, ErrorExtensions, Object, Result as GraphQLResult, SimpleObject,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::{post_repo, user_repo};
use crate::error::AppError;
use crate::models;
use crate::schema::post::Post;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl From<models::User> for User {
    fn from(user: models::User) -> Self {
        User {
            id: user.id,
            username: user.username,
        }
    }
}

#[ComplexObject]
impl User {
    /// Posts authored by this user, in insertion order.
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let posts = post_repo::find_by_author(pool, self.id)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(posts.into_iter().map(Post::from).collect())
    }
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// All users, in insertion order.
    async fn all_users(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<User>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let users = user_repo::list_users(pool)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// A single user by identifier; null when no user matches.
    async fn user(&self, ctx: &Context<'_>, id: i32) -> GraphQLResult<Option<User>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let user = user_repo::find_by_id(pool, id)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(user.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create a user with the given username.
    ///
    /// Duplicate usernames are a silent no-op: no new row is written and
    /// the existing user is returned instead.
    async fn create_user(&self, ctx: &Context<'_>, username: String) -> GraphQLResult<User> {
        crate::schema::ensure_non_empty("username", &username).map_err(|e| e.extend())?;

        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        match user_repo::create_user(pool, &username)
            .await
            .map_err(|e| AppError::Database(e).extend())?
        {
            Some(user) => Ok(user.into()),
            None => {
                // The insert was skipped by the unique constraint; hand
                // back the row that already holds this username.
                let existing = user_repo::find_by_username(pool, &username)
                    .await
                    .map_err(|e| AppError::Database(e).extend())?
                    .ok_or_else(|| {
                        AppError::Internal(format!(
                            "user {} neither inserted nor found",
                            username
                        ))
                        .extend()
                    })?;
                Ok(existing.into())
            }
        }
    }
}
