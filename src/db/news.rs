// src/db/news.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub is_promotion: bool,
    pub created_at: i64,
}

#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub body: String,
    pub is_promotion: bool,
}

fn row_to_news(r: &Row<'_>) -> rusqlite::Result<NewsItem> {
    Ok(NewsItem {
        id: r.get(0)?,
        title: r.get(1)?,
        body: r.get(2)?,
        is_promotion: r.get(3)?,
        created_at: r.get(4)?,
    })
}

/// Newest first. `limit` of None returns everything.
pub fn list_news(conn: &Connection, limit: Option<i64>) -> Result<Vec<NewsItem>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, title, body, is_promotion, created_at
             from news
             order by created_at desc, id desc
             limit ?",
        )
        .map_err(|e| ServerError::DbError(format!("prepare list news failed: {e}")))?;

    // SQLite treats a negative limit as "no limit".
    let rows = stmt
        .query_map(params![limit.unwrap_or(-1)], row_to_news)
        .map_err(|e| ServerError::DbError(format!("list news failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read news row failed: {e}")))?);
    }
    Ok(out)
}

pub fn get_news(conn: &Connection, id: i64) -> Result<Option<NewsItem>, ServerError> {
    conn.query_row(
        "select id, title, body, is_promotion, created_at from news where id = ?",
        params![id],
        row_to_news,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select news failed: {e}")))
}

pub fn insert_news(conn: &Connection, item: &NewsDraft, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert into news (title, body, is_promotion, created_at) values (?, ?, ?, ?)",
        params![item.title, item.body, item.is_promotion, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert news failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn update_news(conn: &Connection, id: i64, item: &NewsDraft) -> Result<bool, ServerError> {
    let updated = conn
        .execute(
            "update news set title = ?, body = ?, is_promotion = ? where id = ?",
            params![item.title, item.body, item.is_promotion, id],
        )
        .map_err(|e| ServerError::DbError(format!("update news failed: {e}")))?;
    Ok(updated == 1)
}

pub fn delete_news(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let deleted = conn
        .execute("delete from news where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete news failed: {e}")))?;
    Ok(deleted == 1)
}
