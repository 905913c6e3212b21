use std::collections::HashMap;

use crate::db::users::User;
use crate::errors::ServerError;

pub mod admin;
pub mod api;
pub mod auth;
pub mod cars;
pub mod catalog;
pub mod favorites;
pub mod home;
pub mod news;

/// Everything a handler needs to know about the incoming request, resolved
/// once by the router.
pub struct RequestCtx {
    pub now: i64,
    pub user: Option<User>,
    /// Raw session cookie value, if the browser sent one.
    pub session_token: Option<String>,
    pub query: HashMap<String, String>,
    pub form: HashMap<String, String>,
}

impl RequestCtx {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn field(&self, key: &str) -> &str {
        self.form.get(key).map(String::as_str).unwrap_or("")
    }

    /// Signed-in admin, or the error page to show instead.
    pub fn require_admin(&self) -> Result<&User, ServerError> {
        match &self.user {
            None => Err(ServerError::Unauthorized("please sign in".into())),
            Some(u) if u.role.is_admin() => Ok(u),
            Some(_) => Err(ServerError::Forbidden),
        }
    }
}

pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

/// `/cars/3` + message -> `/cars/3?notice=...`
pub fn with_notice(path: &str, message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{path}?notice={encoded}")
}
