//! Post schema and resolvers

use async_graphql::{
    ComplexObject, Context, ErrorExtensions, Object, Result as GraphQLResult, SimpleObject,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::{post_repo, user_repo};
use crate::error::AppError;
use crate::models;
use crate::schema::user::User;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author_id: Option<i32>,
}

impl From<models::Post> for Post {
    fn from(post: models::Post) -> Self {
        Post {
            id: post.id,
            title: post.title,
            body: post.body,
            author_id: post.author_id,
        }
    }
}

#[ComplexObject]
impl Post {
    /// The authoring user, or null for an authorless post.
    async fn author(&self, ctx: &Context<'_>) -> GraphQLResult<Option<User>> {
        let author_id = match self.author_id {
            Some(author_id) => author_id,
            None => return Ok(None),
        };

        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let author = user_repo::find_by_id(pool, author_id)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(author.map(User::from))
    }
}

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// All posts, in insertion order.
    async fn all_posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let posts = post_repo::list_posts(pool)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// A single post by identifier; null when no post matches.
    async fn post(&self, ctx: &Context<'_>, id: i32) -> GraphQLResult<Option<Post>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let post = post_repo::find_by_id(pool, id)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(post.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a post. The username selects the author by exact match; an
    /// unknown username yields an authorless post rather than an error.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        username: String,
    ) -> GraphQLResult<Post> {
        crate::schema::ensure_non_empty("title", &title).map_err(|e| e.extend())?;
        crate::schema::ensure_non_empty("body", &body).map_err(|e| e.extend())?;

        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let author = user_repo::find_by_username(pool, &username)
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        let post = post_repo::create_post(pool, &title, &body, author.map(|u| u.id))
            .await
            .map_err(|e| AppError::Database(e).extend())?;

        Ok(post.into())
    }
}
