//! GraphQL schema wiring

pub mod post;
pub mod user;

use async_graphql::{EmptySubscription, MergedObject, Schema};
use sqlx::PgPool;

use crate::error::AppError;

/// Root query object
#[derive(MergedObject, Default)]
pub struct QueryRoot(post::PostQuery, user::UserQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
pub struct MutationRoot(post::PostMutation, user::UserMutation);

/// GraphQL app schema type
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the database pool attached as schema data.
/// The pool is the only state resolvers share; it is constructed once at
/// startup and read back through the request context.
pub fn build_schema(pool: PgPool) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(pool)
    .finish()
}

/// Required string arguments must carry at least one non-whitespace
/// character; the GraphQL type system only enforces presence.
pub(crate) fn ensure_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "{} must be a non-empty string",
            field
        )));
    }
    Ok(())
}
