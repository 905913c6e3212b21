use crate::db::news::NewsItem;
use crate::db::users::User;
use crate::domain::format;
use crate::templates::desktop_layout;
use crate::templates::pages::admin::admin_nav;
use maud::{html, Markup};

pub fn admin_news_page(user: &User, items: &[NewsItem]) -> Markup {
    desktop_layout(
        "News",
        Some(user),
        html! {
            main class="container" {
                h1 { "News" }
                (admin_nav())

                details class="card" style="margin-bottom: 2rem;" {
                    summary { "Publish" }
                    (news_form(None))
                }

                @for item in items {
                    div class="card" style="margin-bottom: 1rem;" {
                        h3 {
                            (item.title)
                            @if item.is_promotion { " " span class="badge promo" { "Promotion" } }
                        }
                        p class="muted" { (format::date_time(item.created_at)) }
                        a href=(format!("/admin/news/{}/edit", item.id)) { "Edit" }
                        form action=(format!("/admin/news/{}/delete", item.id)) method="post" onsubmit="return confirm('Delete this post?');" style="display: inline; margin: 0 0 0 8px;" {
                            button type="submit" style="color: #dc2626; background: none; border: none; cursor: pointer;" { "Delete" }
                        }
                    }
                }
            }
        },
    )
}

pub fn news_edit_page(user: &User, item: &NewsItem) -> Markup {
    desktop_layout(
        "Edit news",
        Some(user),
        html! {
            main class="container narrow" {
                h1 { "Edit post" }
                (admin_nav())
                (news_form(Some(item)))
            }
        },
    )
}

fn news_form(item: Option<&NewsItem>) -> Markup {
    let action = match item {
        Some(n) => format!("/admin/news/{}", n.id),
        None => "/admin/news".to_string(),
    };

    html! {
        form action=(action) method="post" style="display: grid; gap: 8px; max-width: 640px;" {
            input name="title" placeholder="Title" value=[item.map(|n| n.title.as_str())] required;
            textarea name="body" rows="8" placeholder="Text" required {
                (item.map(|n| n.body.as_str()).unwrap_or(""))
            }
            label {
                input type="checkbox" name="is_promotion" value="1" checked[item.is_some_and(|n| n.is_promotion)];
                " Promotion"
            }
            button type="submit" class="primary" { @if item.is_some() { "Save" } @else { "Publish" } }
        }
    }
}
