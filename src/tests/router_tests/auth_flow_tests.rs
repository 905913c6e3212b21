use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_app, post_form};

fn session_from_set_cookie(value: &str) -> String {
    value
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("session="))
        .expect("no session cookie")
        .to_string()
}

#[test]
fn login_page_loads_successfully() {
    let app = init_test_app();

    let resp = handle(get("/login", None), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn register_sets_session_cookie() {
    let app = init_test_app();

    let resp = handle(
        post_form(
            "/register",
            "name=Anna&email=Anna%40Example.com&phone=&password=secret123",
            None,
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");

    let cookie = header(&resp, "Set-Cookie");
    assert!(cookie.contains("HttpOnly"));
    let token = session_from_set_cookie(cookie);

    let body = body_string(handle(get("/", Some(&token)), &app).unwrap());
    assert!(body.contains("Log out"));
    assert!(body.contains("Favorites"));
    assert!(!body.contains("href=\"/admin\""));
}

#[test]
fn register_rejects_duplicate_email() {
    let app = init_test_app();
    let form = "name=Anna&email=anna%40example.com&password=secret123";

    handle(post_form("/register", form, None), &app).unwrap();
    let resp = handle(post_form("/register", form, None), &app).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Create account"));
}

#[test]
fn login_with_wrong_password_rerenders_form() {
    let app = init_test_app();
    handle(
        post_form("/register", "name=Anna&email=anna%40example.com&password=secret123", None),
        &app,
    )
    .unwrap();

    let resp = handle(
        post_form("/login", "email=anna%40example.com&password=wrong-one", None),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 401);

    let body = body_string(resp);
    assert!(body.contains("invalid email or password"));
    assert!(body.contains("anna@example.com"));
}

#[test]
fn login_then_logout_revokes_session() {
    let app = init_test_app();
    handle(
        post_form("/register", "name=Anna&email=anna%40example.com&password=secret123", None),
        &app,
    )
    .unwrap();

    let resp = handle(
        post_form("/login", "email=ANNA%40example.com&password=secret123", None),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    let token = session_from_set_cookie(header(&resp, "Set-Cookie"));

    let resp = handle(get("/favorites", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = handle(post_form("/logout", "", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));

    let resp = handle(get("/favorites", Some(&token)), &app).unwrap();
    assert_eq!(header(&resp, "Location"), "/login");
}
