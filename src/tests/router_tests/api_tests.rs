use serde_json::Value;

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_app, seed_car};

fn json(body: String) -> Value {
    serde_json::from_str(&body).expect("response is not JSON")
}

#[test]
fn cars_endpoint_applies_filters() {
    let app = init_test_app();
    seed_car(&app, "BMW", "X5", 2020, 3_000_000);
    seed_car(&app, "Kia", "Rio", 2017, 900_000);

    let resp = handle(get("/api/cars?min_year=2019", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("application/json"));

    let cars = json(body_string(resp));
    let cars = cars.as_array().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["brand"], "BMW");
    assert_eq!(cars[0]["price"], 3_000_000);
}

#[test]
fn cars_endpoint_rejects_negative_price() {
    let app = init_test_app();

    let resp = handle(get("/api/cars?max_price=-1", None), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json(body_string(resp))["error"], "Maximum price cannot be negative");
}

#[test]
fn quote_endpoint_returns_breakdown() {
    let app = init_test_app();
    let id = seed_car(&app, "Toyota", "Camry", 2022, 2_000_000);

    let resp = handle(get(&format!("/api/cars/{id}/quote?down=400000&term=36&rate=16.9"), None), &app)
        .unwrap();
    assert_eq!(resp.status(), 200);

    let quote = json(body_string(resp));
    assert_eq!(quote["loan_amount"], 1_600_000);
    assert_eq!(quote["term_months"], 36);

    let monthly = quote["monthly_payment"].as_i64().unwrap();
    let total = quote["total_amount"].as_i64().unwrap();
    assert_eq!(total, 400_000 + monthly * 36);
}

#[test]
fn quote_endpoint_uses_defaults_and_reports_errors() {
    let app = init_test_app();
    let id = seed_car(&app, "Toyota", "Camry", 2022, 2_000_000);

    let quote = json(body_string(handle(get(&format!("/api/cars/{id}/quote"), None), &app).unwrap()));
    assert_eq!(quote["down_payment"], 400_000);
    assert_eq!(quote["term_months"], 36);

    let resp = handle(get(&format!("/api/cars/{id}/quote?down=5000000"), None), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(json(body_string(resp))["error"].is_string());

    assert!(matches!(
        handle(get("/api/cars/404/quote", None), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn quote_endpoint_survives_extreme_rate() {
    let app = init_test_app();
    let id = seed_car(&app, "Toyota", "Camry", 2022, 2_000_000);

    let resp = handle(
        get(&format!("/api/cars/{id}/quote?down=400000&rate=100000000&term=84"), None),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let quote = json(body_string(resp));
    assert!(quote["monthly_payment"].as_i64().unwrap() > 0);
    assert!(quote["overpayment"].as_i64().unwrap() > 0);
}

#[test]
fn quote_endpoint_handles_huge_stored_price() {
    let app = init_test_app();
    let price = i64::MAX / 10;
    let id = seed_car(&app, "Bugatti", "Chiron", 2023, price);

    let resp = handle(get(&format!("/api/cars/{id}/quote"), None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(json(body_string(resp))["down_payment"], price / 5);

    let resp = handle(get(&format!("/cars/{id}"), None), &app).unwrap();
    assert_eq!(resp.status(), 200);
}
