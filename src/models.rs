use crate::schema::posts;
use chrono::NaiveDateTime;
use diesel::Queryable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub created_at: NaiveDateTime,
}

// a row about to be inserted, `id` is assigned by the database
#[derive(Debug, Insertable)]
#[table_name = "posts"]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub created_at: NaiveDateTime,
}
