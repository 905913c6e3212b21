// src/auth/accounts.rs
use log::{info, warn};
use rusqlite::Connection;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::sessions::create_session;
use crate::db::users::{self, NewUser};
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub min_password_len: usize,
    /// Lifetime of the session created on login, in seconds.
    pub session_ttl_secs: i64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            min_password_len: 6,
            session_ttl_secs: 60 * 60 * 24 * 7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub password: &'a str,
}

#[derive(Debug, Clone)]
pub struct LoggedIn {
    pub user_id: i64,
    /// Raw session token for the cookie (only its hash is stored).
    pub session_token: String,
}

pub struct AccountService {
    cfg: AccountConfig,
}

impl AccountService {
    pub fn new(cfg: AccountConfig) -> Self {
        Self { cfg }
    }

    pub fn session_ttl_secs(&self) -> i64 {
        self.cfg.session_ttl_secs
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, ServerError> {
        let e = email.trim().to_lowercase();
        if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
            return Err(ServerError::BadRequest("invalid email".into()));
        }
        Ok(e)
    }

    /// Creates a customer account and logs it in.
    pub fn register(
        &self,
        conn: &Connection,
        reg: &Registration<'_>,
        now: i64,
    ) -> Result<LoggedIn, ServerError> {
        let email = Self::normalize_email(reg.email)?;
        let name = reg.name.trim();
        if name.is_empty() {
            return Err(ServerError::BadRequest("name is required".into()));
        }
        if reg.password.chars().count() < self.cfg.min_password_len {
            return Err(ServerError::BadRequest(format!(
                "password must be at least {} characters",
                self.cfg.min_password_len
            )));
        }

        let hash = hash_password(reg.password)?;
        let phone = reg.phone.map(str::trim).filter(|p| !p.is_empty());

        let user_id = users::create_user(
            conn,
            &NewUser {
                email: &email,
                name,
                phone,
                password_hash: &hash,
            },
            now,
        )?;
        info!("registered user {user_id} <{email}>");

        self.start_session(conn, user_id, now)
    }

    /// Email + password login. Unknown email and wrong password produce the
    /// same error.
    pub fn login(
        &self,
        conn: &Connection,
        email: &str,
        password: &str,
        now: i64,
    ) -> Result<LoggedIn, ServerError> {
        let email = Self::normalize_email(email)?;
        let invalid = || ServerError::Unauthorized("invalid email or password".into());

        let Some(creds) = users::find_credentials(conn, &email)? else {
            warn!("login attempt for unknown email <{email}>");
            return Err(invalid());
        };
        if !verify_password(password, &creds.password_hash) {
            warn!("wrong password for user {}", creds.user_id);
            return Err(invalid());
        }

        self.start_session(conn, creds.user_id, now)
    }

    fn start_session(&self, conn: &Connection, user_id: i64, now: i64) -> Result<LoggedIn, ServerError> {
        users::touch_last_login(conn, user_id, now)?;
        let session_token = create_session(conn, user_id, now, self.cfg.session_ttl_secs)?;
        Ok(LoggedIn {
            user_id,
            session_token,
        })
    }
}
