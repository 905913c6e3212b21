use crate::db::{news, Database};
use crate::errors::ServerError;
use crate::handlers::RequestCtx;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages;

pub fn news_list(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let items = db.with_conn(|conn| news::list_news(conn, None))?;
    html_response(pages::news_page(ctx.user.as_ref(), &items))
}

pub fn news_article(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let item = db
        .with_conn(|conn| news::get_news(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(pages::news_article_page(ctx.user.as_ref(), &item))
}
