//! Request-validation and schema-shape tests.
//!
//! These run against a schema with no database attached: everything they
//! exercise is rejected (or answered) by the executor before any resolver
//! touches the pool.

use async_graphql::{EmptySubscription, Schema};
use serde_json::json;

use blog_service::schema::{AppSchema, MutationRoot, QueryRoot};

fn schema_without_db() -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .finish()
}

#[tokio::test]
async fn typename_resolves_without_touching_storage() {
    let resp = schema_without_db().execute("{ __typename }").await;
    assert!(resp.errors.is_empty());
    assert_eq!(
        resp.data.into_json().unwrap(),
        json!({ "__typename": "QueryRoot" })
    );
}

#[tokio::test]
async fn missing_required_argument_is_rejected_before_dispatch() {
    let resp = schema_without_db().execute("{ post }").await;
    assert!(!resp.errors.is_empty());
}

#[tokio::test]
async fn wrongly_typed_argument_is_rejected_before_dispatch() {
    let resp = schema_without_db()
        .execute(r#"{ post(id: "not-an-int") { id } }"#)
        .await;
    assert!(!resp.errors.is_empty());
}

#[tokio::test]
async fn unknown_field_is_rejected() {
    let resp = schema_without_db().execute("{ nonexistentField }").await;
    assert!(!resp.errors.is_empty());
}

#[tokio::test]
async fn create_post_without_username_is_rejected() {
    let resp = schema_without_db()
        .execute(r#"mutation { createPost(title: "t", body: "b") { id } }"#)
        .await;
    assert!(!resp.errors.is_empty());
}

#[tokio::test]
async fn empty_title_fails_validation() {
    let resp = schema_without_db()
        .execute(r#"mutation { createPost(title: "", body: "b", username: "u") { id } }"#)
        .await;

    assert_eq!(resp.errors.len(), 1);
    let err = &resp.errors[0];
    assert!(err.message.contains("title must be a non-empty string"));

    let extensions = err.extensions.as_ref().expect("extensions set");
    assert_eq!(
        extensions.get("error_type"),
        Some(&async_graphql::Value::from("VALIDATION_ERROR"))
    );
}

#[tokio::test]
async fn whitespace_only_body_fails_validation() {
    let resp = schema_without_db()
        .execute(r#"mutation { createPost(title: "t", body: "   ", username: "u") { id } }"#)
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert!(resp.errors[0].message.contains("body must be a non-empty string"));
}

#[tokio::test]
async fn empty_username_fails_create_user_validation() {
    let resp = schema_without_db()
        .execute(r#"mutation { createUser(username: "") { id } }"#)
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert!(resp.errors[0]
        .message
        .contains("username must be a non-empty string"));
}

#[tokio::test]
async fn sdl_declares_nullable_author_link() {
    let sdl = schema_without_db().sdl();
    // authorId and author are nullable; the rest of Post is not.
    assert!(sdl.contains("authorId: Int"));
    assert!(!sdl.contains("authorId: Int!"));
    assert!(sdl.contains("title: String!"));
    assert!(sdl.contains("body: String!"));
}
