use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Request, ResponseBuilder};
use log::debug;

use crate::auth::accounts::AccountService;
use crate::auth::sessions::{load_user_from_session, token_from_cookie_header};
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::{self, admin, api, auth, cars, parse_id, RequestCtx};
use crate::responses::ResultResp;

const MAX_FORM_BYTES: u64 = 64 * 1024;
const MAIN_CSS: &str = include_str!("../static/main.css");

/// Shared state handed to every request.
pub struct App {
    pub db: Database,
    pub accounts: AccountService,
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!("{method} {path}");

    if method == "GET" && path == "/static/main.css" {
        return ResponseBuilder::new()
            .header("Content-Type", "text/css; charset=utf-8")
            .header("Cache-Control", "public, max-age=3600")
            .body(Body::from(MAIN_CSS.to_string()))
            .map_err(|_| ServerError::InternalError);
    }

    let ctx = build_ctx(&mut req, app, &method)?;
    let db = &app.db;

    let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => handlers::home::home(db, &ctx),
        ("GET", ["catalog"]) => handlers::catalog::catalog(db, &ctx),
        ("GET", ["cars", id]) => cars::details(db, &ctx, parse_id(id)?),
        ("POST", ["cars", id, "leads"]) => cars::submit_lead(db, &ctx, parse_id(id)?),
        ("POST", ["cars", id, "favorite"]) => cars::toggle_favorite(db, &ctx, parse_id(id)?),
        ("GET", ["favorites"]) => handlers::favorites::favorites(db, &ctx),
        ("GET", ["news"]) => handlers::news::news_list(db, &ctx),
        ("GET", ["news", id]) => handlers::news::news_article(db, &ctx, parse_id(id)?),

        ("GET", ["login"]) => auth::login_form(&ctx),
        ("POST", ["login"]) => auth::login(db, &app.accounts, &ctx),
        ("GET", ["register"]) => auth::register_form(&ctx),
        ("POST", ["register"]) => auth::register(db, &app.accounts, &ctx),
        ("POST", ["logout"]) => auth::logout(db, &ctx),

        ("GET", ["api", "cars"]) => api::cars_json(db, &ctx),
        ("GET", ["api", "cars", id, "quote"]) => api::quote_json(db, &ctx, parse_id(id)?),

        ("GET", ["admin"]) => admin::dashboard(db, &ctx),
        ("GET", ["admin", "leads", "export"]) => admin::export_leads(db, &ctx),

        ("GET", ["admin", "cars"]) => admin::list_cars(db, &ctx),
        ("POST", ["admin", "cars"]) => admin::create_car(db, &ctx),
        ("GET", ["admin", "cars", id, "edit"]) => admin::edit_car(db, &ctx, parse_id(id)?),
        ("POST", ["admin", "cars", id]) => admin::update_car(db, &ctx, parse_id(id)?),
        ("POST", ["admin", "cars", id, "delete"]) => admin::delete_car(db, &ctx, parse_id(id)?),

        ("GET", ["admin", "news"]) => admin::list_news(db, &ctx),
        ("POST", ["admin", "news"]) => admin::create_news(db, &ctx),
        ("GET", ["admin", "news", id, "edit"]) => admin::edit_news(db, &ctx, parse_id(id)?),
        ("POST", ["admin", "news", id]) => admin::update_news(db, &ctx, parse_id(id)?),
        ("POST", ["admin", "news", id, "delete"]) => admin::delete_news(db, &ctx, parse_id(id)?),

        ("GET", ["admin", "users"]) => admin::list_users(db, &ctx),
        ("POST", ["admin", "users", id, "role"]) => admin::set_user_role(db, &ctx, parse_id(id)?),
        ("POST", ["admin", "users", id, "delete"]) => admin::delete_user(db, &ctx, parse_id(id)?),

        _ => Err(ServerError::NotFound),
    }
}

fn build_ctx(req: &mut Request, app: &App, method: &str) -> Result<RequestCtx, ServerError> {
    let now = now_unix();
    let query = parse_pairs(req.uri().query().unwrap_or("").as_bytes());

    let session_token = req
        .headers()
        .get("Cookie")
        .and_then(|h| h.to_str().ok())
        .and_then(token_from_cookie_header)
        .map(str::to_string);

    let user = match &session_token {
        Some(token) => app
            .db
            .with_conn(|conn| load_user_from_session(conn, token, now))?,
        None => None,
    };

    let form = if method == "POST" {
        parse_pairs(&read_body(req)?)
    } else {
        HashMap::new()
    };

    Ok(RequestCtx {
        now,
        user,
        session_token,
        query,
        form,
    })
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

/// Urlencoded pairs; the last occurrence of a key wins.
fn parse_pairs(raw: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw).into_owned().collect()
}
