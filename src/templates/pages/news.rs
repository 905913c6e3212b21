use crate::db::news::NewsItem;
use crate::db::users::User;
use crate::domain::format;
use crate::templates::desktop_layout;
use maud::{html, Markup};

const TEASER_CHARS: usize = 160;

fn excerpt(body: &str) -> String {
    if body.chars().count() <= TEASER_CHARS {
        return body.to_string();
    }
    let cut: String = body.chars().take(TEASER_CHARS).collect();
    format!("{}…", cut.trim_end())
}

pub fn news_teaser(item: &NewsItem) -> Markup {
    html! {
        article class="news-teaser" {
            @if item.is_promotion {
                span class="badge promo" { "Promotion" }
            }
            h3 { a href=(format!("/news/{}", item.id)) { (item.title) } }
            time class="muted" { (format::date_time(item.created_at)) }
            p { (excerpt(&item.body)) }
        }
    }
}

pub fn news_page(user: Option<&User>, items: &[NewsItem]) -> Markup {
    desktop_layout(
        "News",
        user,
        html! {
            main class="container" {
                h1 { "News & promotions" }
                @if items.is_empty() {
                    p class="muted" { "Nothing here yet." }
                }
                @for item in items {
                    (news_teaser(item))
                }
            }
        },
    )
}

pub fn news_article_page(user: Option<&User>, item: &NewsItem) -> Markup {
    desktop_layout(
        &item.title,
        user,
        html! {
            main class="container narrow" {
                @if item.is_promotion {
                    span class="badge promo" { "Promotion" }
                }
                h1 { (item.title) }
                time class="muted" { (format::date_time(item.created_at)) }
                @for paragraph in item.body.split("\n\n") {
                    p { (paragraph) }
                }
                p { a href="/news" { "← All news" } }
            }
        },
    )
}
