// templates/pages/home.rs

use crate::db::news::NewsItem;
use crate::db::users::User;
use crate::domain::vehicle::Vehicle;
use crate::templates::components::{car_grid, card};
use crate::templates::desktop_layout;
use crate::templates::pages::news::news_teaser;
use maud::{html, Markup};

pub fn home_page(user: Option<&User>, latest_cars: &[Vehicle], latest_news: &[NewsItem]) -> Markup {
    desktop_layout(
        "Home",
        user,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find your next car" }
                    form action="/catalog" method="get" class="search" {
                        input type="search" name="search" placeholder="Brand or model";
                        button type="submit" class="primary" { "Search" }
                    }
                }

                h2 { "New arrivals" }
                (car_grid(latest_cars))
                p { a href="/catalog" { "Browse the full catalog →" } }

                @if !latest_news.is_empty() {
                    (card("News & offers", html! {
                        @for item in latest_news {
                            (news_teaser(item))
                        }
                    }))
                }
            }
        },
    )
}
