// src/db/favorites.rs
use rusqlite::{params, Connection};

use crate::domain::favorites::FavoritesStore;
use crate::errors::ServerError;

/// Favorites persisted in the `favorites` table of an open connection.
pub struct SqlFavorites<'c> {
    conn: &'c Connection,
    now: i64,
}

impl<'c> SqlFavorites<'c> {
    pub fn new(conn: &'c Connection, now: i64) -> Self {
        Self { conn, now }
    }
}

impl FavoritesStore for SqlFavorites<'_> {
    fn is_favorite(&self, user_id: i64, car_id: i64) -> Result<bool, ServerError> {
        let n: i64 = self
            .conn
            .query_row(
                "select count(*) from favorites where user_id = ? and car_id = ?",
                params![user_id, car_id],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("select favorite failed: {e}")))?;
        Ok(n > 0)
    }

    fn set_favorite(&self, user_id: i64, car_id: i64, favorite: bool) -> Result<(), ServerError> {
        let result = if favorite {
            self.conn.execute(
                "insert or ignore into favorites (user_id, car_id, created_at) values (?, ?, ?)",
                params![user_id, car_id, self.now],
            )
        } else {
            self.conn.execute(
                "delete from favorites where user_id = ? and car_id = ?",
                params![user_id, car_id],
            )
        };
        result.map_err(|e| ServerError::DbError(format!("update favorite failed: {e}")))?;
        Ok(())
    }

    fn favorite_ids(&self, user_id: i64) -> Result<Vec<i64>, ServerError> {
        let mut stmt = self
            .conn
            .prepare(
                "select car_id from favorites where user_id = ? order by created_at desc, id desc",
            )
            .map_err(|e| ServerError::DbError(format!("prepare favorites failed: {e}")))?;

        let rows = stmt
            .query_map(params![user_id], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("list favorites failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(format!("read favorite failed: {e}")))?);
        }
        Ok(out)
    }
}
