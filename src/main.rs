use astra::Server;
use log::{error, info, warn};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::auth::accounts::{AccountConfig, AccountService};
use crate::config::AppConfig;
use crate::db::connection::init_db;
use crate::db::{users, Database};
use crate::router::{handle, App};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Err(e) = TermLogger::init(cfg.log_level, log_config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Logger init failed: {e}");
    }

    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    if let Some(email) = &cfg.admin_email {
        match db.with_conn(|conn| users::promote_by_email(conn, email)) {
            Ok(true) => info!("{email} has the admin role"),
            Ok(false) => warn!("admin email {email} has no account yet; register it and restart"),
            Err(e) => error!("Admin promotion failed: {e}"),
        }
    }

    let app = App {
        db,
        accounts: AccountService::new(AccountConfig {
            session_ttl_secs: cfg.session_ttl_secs,
            ..AccountConfig::default()
        }),
    };

    info!("Starting server at http://{} with {} workers", cfg.addr, cfg.workers);
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!("request failed: {err}");
            }
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
