use crate::db::users::User;
use crate::domain::vehicle::Vehicle;
use crate::templates::components::{car_card, notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn favorites_page(user: &User, cars: &[Vehicle], message: Option<&str>) -> Markup {
    desktop_layout(
        "Favorites",
        Some(user),
        html! {
            main class="container" {
                @if let Some(msg) = message {
                    (notice(msg))
                }
                h1 { "Favorites" }
                @if cars.is_empty() {
                    p class="muted" {
                        "You haven't saved any cars yet. "
                        a href="/catalog" { "Open the catalog" }
                    }
                } @else {
                    div class="grid" {
                        @for car in cars {
                            div {
                                (car_card(car))
                                form method="post" action=(format!("/cars/{}/favorite", car.id)) {
                                    input type="hidden" name="back" value="favorites";
                                    button type="submit" class="link" { "Remove" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
