use crate::db::news::{insert_news, NewsDraft};
use crate::db::leads::count_leads;
use crate::domain::format;
use crate::domain::quote::compute_loan_quote;
use crate::errors::ServerError;
use crate::router::{handle, now_unix};
use crate::tests::utils::{body_string, get, header, init_test_app, post_form, seed_car};

#[test]
fn home_page_shows_latest_cars_and_news() {
    let app = init_test_app();
    seed_car(&app, "BMW", "X5", 2020, 3_000_000);
    app.db
        .with_conn(|conn| {
            insert_news(
                conn,
                &NewsDraft {
                    title: "Spring trade-in bonus".into(),
                    body: "Extra 100 000 for your old car.".into(),
                    is_promotion: true,
                },
                now_unix(),
            )
        })
        .unwrap();

    let resp = handle(get("/", None), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("BMW X5"));
    assert!(body.contains("Spring trade-in bonus"));
    assert!(body.contains("Sign in"));
}

#[test]
fn catalog_filters_by_brand_and_search() {
    let app = init_test_app();
    seed_car(&app, "BMW", "X5", 2020, 3_000_000);
    seed_car(&app, "Kia", "Rio", 2017, 900_000);

    let body = body_string(handle(get("/catalog?brand=BMW", None), &app).unwrap());
    assert!(body.contains("Found: 1"));
    assert!(body.contains("BMW X5"));
    assert!(!body.contains("Kia Rio"));

    let body = body_string(handle(get("/catalog?search=rio", None), &app).unwrap());
    assert!(body.contains("Found: 1"));
    assert!(body.contains("Kia Rio"));

    let body = body_string(handle(get("/catalog?min_price=1000000&max_price=", None), &app).unwrap());
    assert!(body.contains("Found: 1"));
    assert!(body.contains("BMW X5"));
}

#[test]
fn catalog_negative_price_shows_message_and_full_list() {
    let app = init_test_app();
    seed_car(&app, "BMW", "X5", 2020, 3_000_000);
    seed_car(&app, "Kia", "Rio", 2017, 900_000);

    let resp = handle(get("/catalog?min_price=-5", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Minimum price cannot be negative"));
    assert!(body.contains("Found: 2"));
}

#[test]
fn car_details_renders_loan_quote() {
    let app = init_test_app();
    let id = seed_car(&app, "Toyota", "Camry", 2022, 2_000_000);

    let resp = handle(get(&format!("/cars/{id}?down=400000&term=36&rate=16.9"), None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let expected = compute_loan_quote(2_000_000, 400_000, 36, 16.9).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Toyota Camry"));
    assert!(body.contains(&format::money(expected.monthly_payment)));
    assert!(body.contains(&format::money(expected.overpayment)));
}

#[test]
fn car_details_explains_invalid_down_payment() {
    let app = init_test_app();
    let id = seed_car(&app, "Toyota", "Camry", 2022, 2_000_000);

    let resp = handle(get(&format!("/cars/{id}?down=2000000"), None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("class=\"alert\""));
}

#[test]
fn unknown_or_malformed_car_id_is_not_found() {
    let app = init_test_app();

    assert!(matches!(handle(get("/cars/999", None), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/cars/abc", None), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/nope", None), &app), Err(ServerError::NotFound)));
}

#[test]
fn lead_submission_is_stored() {
    let app = init_test_app();
    let id = seed_car(&app, "Kia", "Rio", 2017, 900_000);

    let resp = handle(
        post_form(
            &format!("/cars/{id}/leads"),
            "kind=test_drive&name=Ivan&phone=%2B79001234567&comment=",
            None,
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you!"));
    assert_eq!(app.db.with_conn(|conn| count_leads(conn)).unwrap(), 1);
}

#[test]
fn lead_without_phone_is_rejected() {
    let app = init_test_app();
    let id = seed_car(&app, "Kia", "Rio", 2017, 900_000);

    let result = handle(
        post_form(&format!("/cars/{id}/leads"), "kind=purchase&name=Ivan", None),
        &app,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert_eq!(app.db.with_conn(|conn| count_leads(conn)).unwrap(), 0);
}

#[test]
fn news_list_and_article() {
    let app = init_test_app();
    let id = app
        .db
        .with_conn(|conn| {
            insert_news(
                conn,
                &NewsDraft {
                    title: "New showroom".into(),
                    body: "We moved to a bigger place.".into(),
                    is_promotion: false,
                },
                now_unix(),
            )
        })
        .unwrap();

    let body = body_string(handle(get("/news", None), &app).unwrap());
    assert!(body.contains("New showroom"));

    let body = body_string(handle(get(&format!("/news/{id}"), None), &app).unwrap());
    assert!(body.contains("We moved to a bigger place."));
}

#[test]
fn stylesheet_is_served() {
    let app = init_test_app();
    let resp = handle(get("/static/main.css", None), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
}

#[test]
fn home_page_goes_through_catalog_filter() {
    let app = init_test_app();
    seed_car(&app, "BMW", "X5", 2020, 3_000_000);
    seed_car(&app, "Kia", "Rio", 2017, 900_000);

    let body = body_string(handle(get("/", None), &app).unwrap());
    assert!(body.contains("BMW X5"));
    assert!(body.contains("Kia Rio"));

    let body = body_string(handle(get("/?body_type=Sedan&min_year=2019", None), &app).unwrap());
    assert!(body.contains("BMW X5"));
    assert!(!body.contains("Kia Rio"));

    let body = body_string(handle(get("/?max_price=-1", None), &app).unwrap());
    assert!(body.contains("Kia Rio"));
}
