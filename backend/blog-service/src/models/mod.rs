use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Row structs for the two blog tables. The primary key column is named
// "uuid" in the database; selects alias it to "id" so FromRow binds here.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author_id: Option<i32>,
}
