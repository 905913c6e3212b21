use crate::domain::format;
use crate::domain::vehicle::Vehicle;
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn car_card(v: &Vehicle) -> Markup {
    html! {
        a class="card car-card" href=(format!("/cars/{}", v.id)) {
            @if let Some(src) = &v.image_url {
                img src=(src) alt=(v.display_name()) loading="lazy";
            }
            h3 { (v.display_name()) }
            p class="muted" {
                (v.year) " · " (v.body_type) " · " (format::mileage(v.mileage))
            }
            p class="price" { (format::money(v.price)) }
            span class="badge" { (v.status) }
            @if v.is_new() {
                " " span class="badge promo" { "New" }
            }
        }
    }
}

pub fn car_grid(vehicles: &[Vehicle]) -> Markup {
    html! {
        @if vehicles.is_empty() {
            p class="muted" { "No cars match your search." }
        } @else {
            div class="grid" {
                @for v in vehicles {
                    (car_card(v))
                }
            }
        }
    }
}

/// Green confirmation banner.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice" role="status" { (message) }
    }
}

/// Red inline error banner.
pub fn alert(message: &str) -> Markup {
    html! {
        div class="alert" role="alert" { (message) }
    }
}
