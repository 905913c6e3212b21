use crate::db::users::User;
use crate::domain::format;
use crate::domain::vehicle::Vehicle;
use crate::templates::desktop_layout;
use crate::templates::pages::admin::admin_nav;
use maud::{html, Markup};

const TH: &str = "padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;";
const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

pub fn admin_cars_page(user: &User, cars: &[Vehicle]) -> Markup {
    desktop_layout(
        "Cars",
        Some(user),
        html! {
            main class="container" {
                h1 { "Cars" }
                (admin_nav())

                details class="card" style="margin-bottom: 2rem;" {
                    summary { "Add a car" }
                    (car_form(None))
                }

                table style="width: 100%; border-collapse: collapse;" {
                    thead {
                        tr {
                            th style=(TH) { "ID" }
                            th style=(TH) { "Car" }
                            th style=(TH) { "Year" }
                            th style=(TH) { "Price" }
                            th style=(TH) { "Status" }
                            th style=(TH) { "Actions" }
                        }
                    }
                    tbody {
                        @for car in cars {
                            tr {
                                td style=(TD) { (car.id) }
                                td style=(TD) { a href=(format!("/cars/{}", car.id)) { (car.display_name()) } }
                                td style=(TD) { (car.year) }
                                td style=(TD) { (format::money(car.price)) }
                                td style=(TD) { (car.status) }
                                td style=(TD) {
                                    a href=(format!("/admin/cars/{}/edit", car.id)) { "Edit" }
                                    form action=(format!("/admin/cars/{}/delete", car.id)) method="post" onsubmit="return confirm('Delete this car?');" style="display: inline; margin: 0 0 0 8px;" {
                                        button type="submit" style="color: #dc2626; background: none; border: none; cursor: pointer;" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn car_edit_page(user: &User, car: &Vehicle) -> Markup {
    desktop_layout(
        "Edit car",
        Some(user),
        html! {
            main class="container narrow" {
                h1 { "Edit " (car.display_name()) }
                (admin_nav())
                (car_form(Some(car)))
            }
        },
    )
}

fn car_form(car: Option<&Vehicle>) -> Markup {
    let action = match car {
        Some(c) => format!("/admin/cars/{}", c.id),
        None => "/admin/cars".to_string(),
    };

    html! {
        form action=(action) method="post" class="admin-form" style="display: grid; gap: 8px; max-width: 480px;" {
            input name="brand" placeholder="Brand" value=[car.map(|c| c.brand.as_str())] required;
            input name="model" placeholder="Model" value=[car.map(|c| c.model.as_str())] required;
            input name="year" type="number" placeholder="Year" value=[car.map(|c| c.year)] required;
            input name="price" type="number" min="0" placeholder="Price" value=[car.map(|c| c.price)] required;
            input name="mileage" type="number" min="0" placeholder="Mileage, km (0 = new)" value=[car.map(|c| c.mileage)];
            input name="body_type" placeholder="Body type (Sedan, SUV, ...)" value=[car.map(|c| c.body_type.as_str())] required;
            input name="status" placeholder="Status (In stock, Reserved, ...)" value=[car.map(|c| c.status.as_str())] required;
            input name="color" placeholder="Color" value=[car.and_then(|c| c.color.as_deref())];
            input name="engine" placeholder="Engine" value=[car.and_then(|c| c.engine.as_deref())];
            input name="transmission" placeholder="Transmission" value=[car.and_then(|c| c.transmission.as_deref())];
            input name="image_url" type="url" placeholder="Image URL" value=[car.and_then(|c| c.image_url.as_deref())];
            textarea name="description" placeholder="Description" {
                (car.and_then(|c| c.description.as_deref()).unwrap_or(""))
            }
            button type="submit" class="primary" { @if car.is_some() { "Save" } @else { "Add car" } }
        }
    }
}
