use crate::domain::roles::Role;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, post_form, sign_up};

#[test]
fn admin_requires_login() {
    let app = init_test_app();

    for uri in ["/admin", "/admin/cars", "/admin/news", "/admin/users", "/admin/leads/export"] {
        let result = handle(get(uri, None), &app);
        assert!(
            matches!(result, Err(ServerError::Unauthorized(_))),
            "{uri} should require login"
        );
    }
}

#[test]
fn customers_are_forbidden_from_admin() {
    let app = init_test_app();
    let (_, token) = sign_up(&app, "client@example.com", Role::Customer);

    assert!(matches!(handle(get("/admin", Some(&token)), &app), Err(ServerError::Forbidden)));
    assert!(matches!(
        handle(post_form("/admin/cars", "brand=X", Some(&token)), &app),
        Err(ServerError::Forbidden)
    ));
}

#[test]
fn admins_see_dashboard_link_and_page() {
    let app = init_test_app();
    let (_, token) = sign_up(&app, "boss@example.com", Role::Admin);

    let body = body_string(handle(get("/", Some(&token)), &app).unwrap());
    assert!(body.contains("href=\"/admin\""));

    let resp = handle(get("/admin", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Admin Dashboard"));
}

#[test]
fn bogus_session_cookie_is_anonymous() {
    let app = init_test_app();

    let body = body_string(handle(get("/", Some("not-a-real-token")), &app).unwrap());
    assert!(body.contains("Sign in"));
    assert!(matches!(
        handle(get("/admin", Some("not-a-real-token")), &app),
        Err(ServerError::Unauthorized(_))
    ));
}
