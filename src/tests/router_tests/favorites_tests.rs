use crate::domain::roles::Role;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_app, post_form, seed_car, sign_up};

#[test]
fn anonymous_visitors_are_sent_to_login() {
    let app = init_test_app();
    let id = seed_car(&app, "BMW", "X5", 2020, 3_000_000);

    let resp = handle(post_form(&format!("/cars/{id}/favorite"), "", None), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/login");

    let resp = handle(get("/favorites", None), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/login");
}

#[test]
fn toggle_adds_then_removes() {
    let app = init_test_app();
    let id = seed_car(&app, "BMW", "X5", 2020, 3_000_000);
    let (_, token) = sign_up(&app, "fan@example.com", Role::Customer);

    let resp = handle(post_form(&format!("/cars/{id}/favorite"), "", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(
        header(&resp, "Location"),
        format!("/cars/{id}?notice=%22BMW+X5%22+added+to+favorites")
    );

    let body = body_string(handle(get("/favorites", Some(&token)), &app).unwrap());
    assert!(body.contains("BMW X5"));

    let body = body_string(handle(get(&format!("/cars/{id}"), Some(&token)), &app).unwrap());
    assert!(body.contains("Remove from favorites"));

    let resp = handle(
        post_form(&format!("/cars/{id}/favorite"), "back=favorites", Some(&token)),
        &app,
    )
    .unwrap();
    assert_eq!(
        header(&resp, "Location"),
        "/favorites?notice=%22BMW+X5%22+removed+from+favorites"
    );

    let body = body_string(
        handle(get("/favorites?notice=%22BMW+X5%22+removed+from+favorites", Some(&token)), &app)
            .unwrap(),
    );
    assert!(body.contains("removed from favorites"));
    assert!(body.contains("haven't saved any cars"));
}

#[test]
fn favorites_are_per_user() {
    let app = init_test_app();
    let id = seed_car(&app, "Kia", "Rio", 2017, 900_000);
    let (_, first) = sign_up(&app, "first@example.com", Role::Customer);
    let (_, second) = sign_up(&app, "second@example.com", Role::Customer);

    handle(post_form(&format!("/cars/{id}/favorite"), "", Some(&first)), &app).unwrap();

    let body = body_string(handle(get("/favorites", Some(&second)), &app).unwrap());
    assert!(!body.contains("Kia Rio"));
}
