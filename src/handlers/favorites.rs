use crate::db::favorites::SqlFavorites;
use crate::db::{cars, Database};
use crate::domain::favorites::FavoritesStore;
use crate::handlers::RequestCtx;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages;

pub fn favorites(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let Some(user) = &ctx.user else {
        return redirect("/login");
    };

    let cars = db.with_conn(|conn| {
        let ids = SqlFavorites::new(conn, ctx.now).favorite_ids(user.id)?;
        cars::cars_by_ids(conn, &ids)
    })?;

    html_response(pages::favorites_page(user, &cars, ctx.param("notice")))
}
