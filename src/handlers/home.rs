use log::debug;

use crate::db::{cars, news, Database};
use crate::domain::catalog::{filter_catalog, FilterQuery};
use crate::handlers::RequestCtx;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages;

const LATEST_CARS: usize = 6;
const LATEST_NEWS: i64 = 3;

/// Newest cars that pass the catalog filter (usually the empty query) plus recent news.
pub fn home(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let (all, latest_news) = db.with_conn(|conn| {
        Ok((cars::list_cars(conn)?, news::list_news(conn, Some(LATEST_NEWS))?))
    })?;

    let query = FilterQuery::from_params(&ctx.query);
    let mut latest_cars = match filter_catalog(&all, &query) {
        Ok(found) => found,
        Err(e) => {
            debug!("home query rejected: {e}");
            all
        }
    };
    latest_cars.truncate(LATEST_CARS);

    html_response(pages::home_page(ctx.user.as_ref(), &latest_cars, &latest_news))
}
