use log::info;

use crate::db::favorites::SqlFavorites;
use crate::db::{cars, leads, Database};
use crate::domain::favorites::{apply_toggle, FavoritesStore};
use crate::domain::leads::Lead;
use crate::domain::quote::{
    clamp_term, compute_loan_quote, default_down_payment, DEFAULT_ANNUAL_RATE, DEFAULT_TERM_MONTHS,
};
use crate::domain::vehicle::Vehicle;
use crate::errors::ServerError;
use crate::handlers::{with_notice, RequestCtx};
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::{self, CarDetailsVm};

/// Calculator inputs from `down`, `term`, `rate`, with storefront defaults
/// for anything missing or unparseable. The term is clamped to the offered range.
pub fn calculator_inputs(ctx: &RequestCtx, car: &Vehicle) -> (i64, u32, f64) {
    let down = ctx
        .param("down")
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| default_down_payment(car.price));
    let term = ctx
        .param("term")
        .and_then(|v| v.parse().ok())
        .map(clamp_term)
        .unwrap_or(DEFAULT_TERM_MONTHS);
    let rate = ctx
        .param("rate")
        .and_then(|v| v.replace(',', ".").parse().ok())
        .unwrap_or(DEFAULT_ANNUAL_RATE);
    (down, term, rate)
}

fn load_car(db: &Database, id: i64) -> Result<Vehicle, ServerError> {
    db.with_conn(|conn| cars::get_car(conn, id))?
        .ok_or(ServerError::NotFound)
}

pub fn details(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let car = load_car(db, id)?;

    let is_favorite = match &ctx.user {
        Some(u) => db.with_conn(|conn| SqlFavorites::new(conn, ctx.now).is_favorite(u.id, id))?,
        None => false,
    };

    let (down_payment, term_months, annual_rate) = calculator_inputs(ctx, &car);
    let quote = compute_loan_quote(car.price, down_payment, term_months, annual_rate)
        .map_err(|e| e.to_string());

    html_response(pages::car_details_page(
        ctx.user.as_ref(),
        &CarDetailsVm {
            car,
            down_payment,
            term_months,
            annual_rate,
            quote,
            is_favorite,
            notice: ctx.param("notice").map(str::to_string),
        },
    ))
}

pub fn submit_lead(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let car = load_car(db, id)?;
    let lead = Lead::from_form(&ctx.form)?;
    let user_id = ctx.user.as_ref().map(|u| u.id);

    let lead_id = db.with_conn(|conn| leads::insert_lead(conn, car.id, user_id, &lead, ctx.now))?;
    info!(
        "lead {lead_id}: {} for car {} ({})",
        lead.kind.as_str(),
        car.id,
        car.display_name()
    );

    html_response(pages::lead_received_page(ctx.user.as_ref(), &car, lead.kind))
}

pub fn toggle_favorite(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let Some(user) = &ctx.user else {
        return redirect("/login");
    };
    let car = load_car(db, id)?;

    let toggle = db.with_conn(|conn| {
        apply_toggle(&SqlFavorites::new(conn, ctx.now), user.id, car.id, &car.display_name())
    })?;

    let back = match ctx.field("back") {
        "favorites" => "/favorites".to_string(),
        _ => format!("/cars/{}", car.id),
    };
    redirect(&with_notice(&back, &toggle.message))
}
