//! Post use cases: create, list, get, update, delete.
//!
//! Emptiness of title/content/author is the shell's concern; this layer
//! accepts any text.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateReq {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateReq {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Create a new post with a server-assigned id and current timestamp.
pub fn post_create(pool: &DbPool, req: PostCreateReq) -> Result<PostDto, AppError> {
    let now = Utc::now().to_rfc3339();

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO posts (title, content, author, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![&req.title, &req.content, &req.author, &now],
    )?;
    let id = conn.last_insert_rowid();

    Ok(PostDto {
        id,
        title: req.title,
        content: req.content,
        author: req.author,
        created_at: now,
    })
}

/// List every post, most recent first. Same-instant inserts fall back to id order.
pub fn post_list(pool: &DbPool) -> Result<Vec<PostDto>, AppError> {
    let conn = get_connection(pool);

    let mut stmt = conn
        .prepare(
            "SELECT id, title, content, author, created_at FROM posts
             ORDER BY created_at DESC, id DESC",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;

    let rows = stmt.query_map([], |row| {
        Ok(PostDto {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            author: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;

    let mut posts = Vec::new();
    for post in rows {
        posts.push(post?);
    }

    Ok(posts)
}

/// Fetch a single post; `None` when no row has that id.
pub fn post_get(pool: &DbPool, id: i64) -> Result<Option<PostDto>, AppError> {
    let conn = get_connection(pool);

    let mut stmt = conn
        .prepare("SELECT id, title, content, author, created_at FROM posts WHERE id = ?1")
        .map_err(|e| AppError::Db(e.to_string()))?;

    let post = stmt
        .query_row(params![id], |row| {
            Ok(PostDto {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                author: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(post)
}

/// Overwrite title and content; author and created_at stay as inserted.
/// A missing id affects zero rows and is still a success.
pub fn post_update(pool: &DbPool, req: PostUpdateReq) -> Result<(), AppError> {
    let conn = get_connection(pool);

    conn.execute(
        "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3",
        params![&req.title, &req.content, req.id],
    )?;

    Ok(())
}

/// Remove the post permanently. A missing id is still a success.
pub fn post_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let conn = get_connection(pool);

    conn.execute("DELETE FROM posts WHERE id = ?1", params![id])?;

    Ok(())
}
