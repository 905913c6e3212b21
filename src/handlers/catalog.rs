use log::debug;

use crate::db::{cars, Database};
use crate::domain::catalog::{catalog_facets, filter_catalog, FilterQuery};
use crate::handlers::RequestCtx;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::{self, CatalogVm};

pub fn catalog(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let all = db.with_conn(|conn| cars::list_cars(conn))?;
    let query = FilterQuery::from_params(&ctx.query);
    let facets = catalog_facets(&all);

    // A rejected query falls back to the unfiltered catalog with a message.
    let (cars, error) = match filter_catalog(&all, &query) {
        Ok(found) => (found, None),
        Err(e) => {
            debug!("catalog query rejected: {e}");
            (all, Some(e.to_string()))
        }
    };

    html_response(pages::catalog_page(
        ctx.user.as_ref(),
        &CatalogVm {
            query,
            facets,
            cars,
            error,
        },
    ))
}
