use crate::db::users::User;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user: Option<&User>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Autosalon" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" { "Autosalon" }
                    nav {
                        ul {
                            li { a href="/catalog" { "Catalog" } }
                            li { a href="/news" { "News" } }
                            @if let Some(u) = user {
                                li { a href="/favorites" { "Favorites" } }
                                @if u.role.is_admin() {
                                    li { a href="/admin" { "Admin" } }
                                }
                            }
                        }
                    }

                    @match user {
                        Some(u) => {
                            form action="/logout" method="post" class="inline" {
                                span class="user-name" { (u.name) }
                                button type="submit" class="link" { "Log out" }
                            }
                        }
                        None => {
                            div class="inline" {
                                a href="/register" { "Create account" }
                                a href="/login" { "Sign in" }
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
