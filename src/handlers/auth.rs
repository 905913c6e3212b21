use crate::auth::accounts::{AccountService, Registration};
use crate::auth::sessions::{clear_session_cookie, revoke_session, session_cookie};
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::RequestCtx;
use crate::responses::{html_response, html_response_with_status, redirect, redirect_with_cookie, ResultResp};
use crate::templates::pages;

pub fn login_form(ctx: &RequestCtx) -> ResultResp {
    if ctx.user.is_some() {
        return redirect("/");
    }
    html_response(pages::login_page(None, None))
}

pub fn login(db: &Database, accounts: &AccountService, ctx: &RequestCtx) -> ResultResp {
    let email = ctx.field("email");
    let result = db.with_conn(|conn| accounts.login(conn, email, ctx.field("password"), ctx.now));

    match result {
        Ok(logged_in) => redirect_with_cookie(
            "/",
            &session_cookie(&logged_in.session_token, accounts.session_ttl_secs()),
        ),
        Err(ServerError::Unauthorized(msg)) => {
            html_response_with_status(401, pages::login_page(Some(&msg), Some(email)))
        }
        Err(ServerError::BadRequest(msg)) => {
            html_response_with_status(400, pages::login_page(Some(&msg), Some(email)))
        }
        Err(e) => Err(e),
    }
}

pub fn register_form(ctx: &RequestCtx) -> ResultResp {
    if ctx.user.is_some() {
        return redirect("/");
    }
    html_response(pages::register_page(None))
}

pub fn register(db: &Database, accounts: &AccountService, ctx: &RequestCtx) -> ResultResp {
    let reg = Registration {
        name: ctx.field("name"),
        email: ctx.field("email"),
        phone: Some(ctx.field("phone")),
        password: ctx.field("password"),
    };

    match db.with_conn(|conn| accounts.register(conn, &reg, ctx.now)) {
        Ok(logged_in) => redirect_with_cookie(
            "/",
            &session_cookie(&logged_in.session_token, accounts.session_ttl_secs()),
        ),
        Err(ServerError::BadRequest(msg)) => {
            html_response_with_status(400, pages::register_page(Some(&msg)))
        }
        Err(e) => Err(e),
    }
}

pub fn logout(db: &Database, ctx: &RequestCtx) -> ResultResp {
    if let Some(token) = &ctx.session_token {
        db.with_conn(|conn| revoke_session(conn, token, ctx.now))?;
    }
    redirect_with_cookie("/", &clear_session_cookie())
}
