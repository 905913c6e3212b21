use crate::db::{cars, leads, news, users};
use crate::domain::leads::{Lead, LeadKind};
use crate::domain::roles::Role;
use crate::errors::ServerError;
use crate::router::{handle, now_unix};
use crate::tests::utils::{
    body_bytes, body_string, get, header, init_test_app, post_form, seed_car, sign_up,
};

const CAR_FORM: &str =
    "brand=Lada&model=Vesta&year=2023&price=1500000&mileage=&body_type=Sedan&status=In+stock&color=White";

#[test]
fn admin_creates_updates_and_deletes_car() {
    let app = init_test_app();
    let (_, token) = sign_up(&app, "admin@example.com", Role::Admin);

    let resp = handle(post_form("/admin/cars", CAR_FORM, Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/admin/cars");

    let all = app.db.with_conn(|conn| cars::list_cars(conn)).unwrap();
    assert_eq!(all.len(), 1);
    let id = all[0].id;
    assert_eq!(all[0].display_name(), "Lada Vesta");
    assert_eq!(all[0].mileage, 0);

    let body = body_string(handle(get(&format!("/admin/cars/{id}/edit"), Some(&token)), &app).unwrap());
    assert!(body.contains("Vesta"));

    let updated = CAR_FORM.replace("price=1500000", "price=1400000");
    handle(post_form(&format!("/admin/cars/{id}"), &updated, Some(&token)), &app).unwrap();
    let car = app.db.with_conn(|conn| cars::get_car(conn, id)).unwrap().unwrap();
    assert_eq!(car.price, 1_400_000);

    handle(post_form(&format!("/admin/cars/{id}/delete"), "", Some(&token)), &app).unwrap();
    assert_eq!(app.db.with_conn(|conn| cars::count_cars(conn)).unwrap(), 0);

    assert!(matches!(
        handle(post_form(&format!("/admin/cars/{id}/delete"), "", Some(&token)), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn invalid_car_form_is_rejected() {
    let app = init_test_app();
    let (_, token) = sign_up(&app, "admin@example.com", Role::Admin);

    let no_brand = CAR_FORM.replace("brand=Lada", "brand=");
    assert!(matches!(
        handle(post_form("/admin/cars", &no_brand, Some(&token)), &app),
        Err(ServerError::BadRequest(_))
    ));

    let negative = CAR_FORM.replace("price=1500000", "price=-1");
    assert!(matches!(
        handle(post_form("/admin/cars", &negative, Some(&token)), &app),
        Err(ServerError::BadRequest(_))
    ));
    assert_eq!(app.db.with_conn(|conn| cars::count_cars(conn)).unwrap(), 0);
}

#[test]
fn admin_manages_news() {
    let app = init_test_app();
    let (_, token) = sign_up(&app, "admin@example.com", Role::Admin);

    let resp = handle(
        post_form(
            "/admin/news",
            "title=Winter+sale&body=Up+to+10%25+off&is_promotion=1",
            Some(&token),
        ),
        &app,
    )
    .unwrap();
    assert_eq!(header(&resp, "Location"), "/admin/news");

    let items = app.db.with_conn(|conn| news::list_news(conn, None)).unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_promotion);
    let id = items[0].id;

    handle(
        post_form(&format!("/admin/news/{id}"), "title=Winter+sale&body=Over", Some(&token)),
        &app,
    )
    .unwrap();
    let item = app.db.with_conn(|conn| news::get_news(conn, id)).unwrap().unwrap();
    assert_eq!(item.body, "Over");
    assert!(!item.is_promotion);

    assert!(matches!(
        handle(post_form("/admin/news", "title=&body=x", Some(&token)), &app),
        Err(ServerError::BadRequest(_))
    ));

    handle(post_form(&format!("/admin/news/{id}/delete"), "", Some(&token)), &app).unwrap();
    assert!(app.db.with_conn(|conn| news::get_news(conn, id)).unwrap().is_none());
}

#[test]
fn admin_manages_roles_but_not_their_own() {
    let app = init_test_app();
    let (admin_id, token) = sign_up(&app, "admin@example.com", Role::Admin);
    let (client_id, _) = sign_up(&app, "client@example.com", Role::Customer);

    let body = body_string(handle(get("/admin/users", Some(&token)), &app).unwrap());
    assert!(body.contains("client@example.com"));
    assert!(body.contains("You"));

    handle(
        post_form(&format!("/admin/users/{client_id}/role"), "role=admin", Some(&token)),
        &app,
    )
    .unwrap();
    let client = app.db.with_conn(|conn| users::get_user(conn, client_id)).unwrap().unwrap();
    assert_eq!(client.role, Role::Admin);

    assert!(matches!(
        handle(
            post_form(&format!("/admin/users/{admin_id}/role"), "role=customer", Some(&token)),
            &app
        ),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(post_form(&format!("/admin/users/{admin_id}/delete"), "", Some(&token)), &app),
        Err(ServerError::BadRequest(_))
    ));

    handle(post_form(&format!("/admin/users/{client_id}/delete"), "", Some(&token)), &app).unwrap();
    assert!(app.db.with_conn(|conn| users::get_user(conn, client_id)).unwrap().is_none());
}

#[test]
fn dashboard_lists_recent_leads_and_export_downloads_workbook() {
    let app = init_test_app();
    let (_, token) = sign_up(&app, "admin@example.com", Role::Admin);
    let car_id = seed_car(&app, "Kia", "Rio", 2017, 900_000);

    app.db
        .with_conn(|conn| {
            leads::insert_lead(
                conn,
                car_id,
                None,
                &Lead {
                    kind: LeadKind::TradeIn,
                    name: "Petr".into(),
                    phone: "+79990001122".into(),
                    comment: None,
                    trade_in_car: Some("Ford Focus 2012".into()),
                },
                now_unix(),
            )
        })
        .unwrap();

    let body = body_string(handle(get("/admin", Some(&token)), &app).unwrap());
    assert!(body.contains("Petr"));
    assert!(body.contains("Kia Rio"));

    let resp = handle(get("/admin/leads/export", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").contains("spreadsheetml"));
    assert!(header(&resp, "Content-Disposition").contains("leads_"));

    let bytes = body_bytes(resp);
    assert!(bytes.starts_with(b"PK"));
}
