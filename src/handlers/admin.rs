use log::info;

use crate::db::{cars, leads, news, users, Database};
use crate::db::news::NewsDraft;
use crate::domain::roles::Role;
use crate::domain::vehicle::VehicleDraft;
use crate::errors::ServerError;
use crate::handlers::RequestCtx;
use crate::responses::{html_response, redirect, ResultResp};
use crate::spreadsheets::export_leads_xlsx;
use crate::templates::pages::{self, AdminVm};

const RECENT_LEADS: i64 = 20;

pub fn dashboard(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;

    let vm = db.with_conn(|conn| {
        Ok(AdminVm {
            car_count: cars::count_cars(conn)?,
            user_count: users::count_users(conn)?,
            lead_count: leads::count_leads(conn)?,
            recent_leads: leads::list_leads(conn, Some(RECENT_LEADS))?,
        })
    })?;

    html_response(pages::admin_page(admin, &vm))
}

pub fn export_leads(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;
    let rows = db.with_conn(|conn| leads::list_leads(conn, None))?;
    info!("admin {} exported {} leads", admin.id, rows.len());
    export_leads_xlsx(&rows, ctx.now)
}

// --- cars ---

pub fn list_cars(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;
    let all = db.with_conn(|conn| cars::list_cars(conn))?;
    html_response(pages::admin_cars_page(admin, &all))
}

pub fn create_car(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;
    let draft = VehicleDraft::from_form(&ctx.form)?;
    let id = db.with_conn(|conn| cars::insert_car(conn, &draft, ctx.now))?;
    info!("admin {} added car {id} ({} {})", admin.id, draft.brand, draft.model);
    redirect("/admin/cars")
}

pub fn edit_car(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    let car = db
        .with_conn(|conn| cars::get_car(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(pages::car_edit_page(admin, &car))
}

pub fn update_car(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    let draft = VehicleDraft::from_form(&ctx.form)?;
    if !db.with_conn(|conn| cars::update_car(conn, id, &draft))? {
        return Err(ServerError::NotFound);
    }
    info!("admin {} updated car {id}", admin.id);
    redirect("/admin/cars")
}

pub fn delete_car(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    if !db.with_conn(|conn| cars::delete_car(conn, id))? {
        return Err(ServerError::NotFound);
    }
    info!("admin {} deleted car {id}", admin.id);
    redirect("/admin/cars")
}

// --- news ---

fn news_draft(ctx: &RequestCtx) -> Result<NewsDraft, ServerError> {
    let title = ctx.field("title").trim();
    let body = ctx.field("body").trim();
    if title.is_empty() || body.is_empty() {
        return Err(ServerError::BadRequest("title and text are required".into()));
    }
    Ok(NewsDraft {
        title: title.to_string(),
        body: body.to_string(),
        is_promotion: !ctx.field("is_promotion").is_empty(),
    })
}

pub fn list_news(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;
    let items = db.with_conn(|conn| news::list_news(conn, None))?;
    html_response(pages::admin_news_page(admin, &items))
}

pub fn create_news(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;
    let draft = news_draft(ctx)?;
    let id = db.with_conn(|conn| news::insert_news(conn, &draft, ctx.now))?;
    info!("admin {} published news {id}", admin.id);
    redirect("/admin/news")
}

pub fn edit_news(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    let item = db
        .with_conn(|conn| news::get_news(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(pages::news_edit_page(admin, &item))
}

pub fn update_news(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    let draft = news_draft(ctx)?;
    if !db.with_conn(|conn| news::update_news(conn, id, &draft))? {
        return Err(ServerError::NotFound);
    }
    info!("admin {} updated news {id}", admin.id);
    redirect("/admin/news")
}

pub fn delete_news(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    if !db.with_conn(|conn| news::delete_news(conn, id))? {
        return Err(ServerError::NotFound);
    }
    info!("admin {} deleted news {id}", admin.id);
    redirect("/admin/news")
}

// --- users ---

pub fn list_users(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let admin = ctx.require_admin()?;
    let all = db.with_conn(|conn| users::list_users(conn))?;
    html_response(pages::admin_users_page(admin, &all))
}

pub fn set_user_role(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    if id == admin.id {
        return Err(ServerError::BadRequest("you cannot change your own role".into()));
    }
    let role = Role::from_form(ctx.field("role"))
        .ok_or_else(|| ServerError::BadRequest("unknown role".into()))?;

    if !db.with_conn(|conn| users::set_role(conn, id, role))? {
        return Err(ServerError::NotFound);
    }
    info!("admin {} set role of user {id} to {}", admin.id, role.label());
    redirect("/admin/users")
}

pub fn delete_user(db: &Database, ctx: &RequestCtx, id: i64) -> ResultResp {
    let admin = ctx.require_admin()?;
    if id == admin.id {
        return Err(ServerError::BadRequest("you cannot delete your own account".into()));
    }
    if !db.with_conn(|conn| users::delete_user(conn, id))? {
        return Err(ServerError::NotFound);
    }
    info!("admin {} deleted user {id}", admin.id);
    redirect("/admin/users")
}
