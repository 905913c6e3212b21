use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};

use astra::{Body, Request, Response};
use http::Method;

use crate::auth::accounts::{AccountConfig, AccountService, Registration};
use crate::db::cars::{insert_car, tests::draft};
use crate::db::connection::init_db;
use crate::db::{users, Database};
use crate::domain::roles::Role;
use crate::router::{now_unix, App};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh app backed by its own on-disk database built from the production schema.
pub fn init_test_app() -> App {
    let path = std::env::temp_dir().join(format!(
        "autosalon_test_{}_{}.sqlite3",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_file(&path);

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    App {
        db,
        accounts: AccountService::new(AccountConfig::default()),
    }
}

pub fn seed_car(app: &App, brand: &str, model: &str, year: i32, price: i64) -> i64 {
    app.db
        .with_conn(|conn| insert_car(conn, &draft(brand, model, year, price), now_unix()))
        .expect("Failed to insert car")
}

/// Registers an account and returns (user id, session token).
pub fn sign_up(app: &App, email: &str, role: Role) -> (i64, String) {
    let logged_in = app
        .db
        .with_conn(|conn| {
            app.accounts.register(
                conn,
                &Registration {
                    name: "Test User",
                    email,
                    phone: Some("+7 900 000-00-00"),
                    password: "secret123",
                },
                now_unix(),
            )
        })
        .expect("Failed to register");

    if role == Role::Admin {
        app.db
            .with_conn(|conn| users::set_role(conn, logged_in.user_id, Role::Admin))
            .expect("Failed to promote to admin");
    }
    (logged_in.user_id, logged_in.session_token)
}

pub fn get(uri: &str, session: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, session: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn header<'r>(resp: &'r Response, name: &str) -> &'r str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
