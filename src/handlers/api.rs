use serde::Serialize;

use crate::db::{cars, Database};
use crate::domain::catalog::{filter_catalog, FilterQuery};
use crate::domain::quote::compute_loan_quote;
use crate::errors::ServerError;
use crate::handlers::cars::calculator_inputs;
use crate::handlers::RequestCtx;
use crate::responses::{json_response, ResultResp};

#[derive(Serialize)]
struct ApiError {
    error: String,
}

fn bad_request(message: String) -> ResultResp {
    json_response(400, &ApiError { error: message })
}

/// GET /api/cars: same parameters as the HTML catalog.
pub fn cars_json(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let all = db.with_conn(|conn| cars::list_cars(conn))?;
    let query = FilterQuery::from_params(&ctx.query);

    match filter_catalog(&all, &query) {
        Ok(found) => json_response(200, &found),
        Err(e) => bad_request(e.to_string()),
    }
}

/// GET /api/cars/{id}/quote?down=&term=&rate=
pub fn quote_json(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let car = db
        .with_conn(|conn| cars::get_car(conn, id))?
        .ok_or(ServerError::NotFound)?;

    let (down, term, rate) = calculator_inputs(ctx, &car);
    match compute_loan_quote(car.price, down, term, rate) {
        Ok(quote) => json_response(200, &quote),
        Err(e) => bad_request(e.to_string()),
    }
}
