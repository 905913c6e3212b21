// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::roles::Role;
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

/// Stored credentials for a login attempt.
pub struct Credentials {
    pub user_id: i64,
    pub password_hash: String,
}

pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub password_hash: &'a str,
}

const USER_SELECT: &str = r#"
    select u.id, u.email, u.name, u.phone, u.role_id, r.name, u.created_at, u.last_login_at
    from users u
    left join roles r on r.id = u.role_id
"#;

fn row_to_user(r: &Row<'_>) -> rusqlite::Result<User> {
    let role_id: Option<i64> = r.get(4)?;
    let role_label: Option<String> = r.get(5)?;
    Ok(User {
        id: r.get(0)?,
        email: r.get(1)?,
        name: r.get(2)?,
        phone: r.get(3)?,
        role: Role::classify(role_id, role_label.as_deref()),
        created_at: r.get(6)?,
        last_login_at: r.get(7)?,
    })
}

/// Email must already be normalized. Fails with BadRequest if it is taken.
pub fn create_user(conn: &Connection, user: &NewUser<'_>, now: i64) -> Result<i64, ServerError> {
    let inserted = conn
        .execute(
            r#"
            insert or ignore into users (email, name, phone, password_hash, role_id, created_at)
            values (?, ?, ?, ?, ?, ?)
            "#,
            params![
                user.email,
                user.name,
                user.phone,
                user.password_hash,
                Role::Customer.id(),
                now
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    if inserted == 0 {
        return Err(ServerError::BadRequest("email is already registered".into()));
    }
    Ok(conn.last_insert_rowid())
}

pub fn get_user(conn: &Connection, id: i64) -> Result<Option<User>, ServerError> {
    conn.query_row(&format!("{USER_SELECT} where u.id = ?"), params![id], row_to_user)
        .optional()
        .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

pub fn find_credentials(conn: &Connection, email: &str) -> Result<Option<Credentials>, ServerError> {
    conn.query_row(
        "select id, password_hash from users where email = ?",
        params![email],
        |r| {
            Ok(Credentials {
                user_id: r.get(0)?,
                password_hash: r.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select credentials failed: {e}")))
}

pub fn list_users(conn: &Connection) -> Result<Vec<User>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{USER_SELECT} order by u.id"))
        .map_err(|e| ServerError::DbError(format!("prepare list users failed: {e}")))?;

    let rows = stmt
        .query_map([], row_to_user)
        .map_err(|e| ServerError::DbError(format!("list users failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read user row failed: {e}")))?);
    }
    Ok(out)
}

pub fn set_role(conn: &Connection, user_id: i64, role: Role) -> Result<bool, ServerError> {
    let updated = conn
        .execute(
            "update users set role_id = ? where id = ?",
            params![role.id(), user_id],
        )
        .map_err(|e| ServerError::DbError(format!("update role failed: {e}")))?;
    Ok(updated == 1)
}

/// Grants admin to an existing account. Returns false if no such email.
pub fn promote_by_email(conn: &Connection, email: &str) -> Result<bool, ServerError> {
    let updated = conn
        .execute(
            "update users set role_id = ? where email = ?",
            params![Role::Admin.id(), email],
        )
        .map_err(|e| ServerError::DbError(format!("promote user failed: {e}")))?;
    Ok(updated == 1)
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}

pub fn delete_user(conn: &Connection, user_id: i64) -> Result<bool, ServerError> {
    let deleted = conn
        .execute("delete from users where id = ?", params![user_id])
        .map_err(|e| ServerError::DbError(format!("delete user failed: {e}")))?;
    Ok(deleted == 1)
}

pub fn count_users(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from users", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count users failed: {e}")))
}
