use crate::templates::components::alert;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>, email: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                @if let Some(e) = error {
                    (alert(e))
                }
                form method="post" action="/login" class="auth-form" {
                    label for="email" { "Email" }
                    input type="email" id="email" name="email" value=[email] autocomplete="email" required;

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" autocomplete="current-password" required;

                    button type="submit" class="primary" { "Sign in" }
                }
                p class="microcopy" {
                    "No account yet? " a href="/register" { "Create one" }
                }
            }
        },
    )
}

pub fn register_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Create account",
        None,
        html! {
            main class="container narrow" {
                h1 { "Create account" }
                @if let Some(e) = error {
                    (alert(e))
                }
                form method="post" action="/register" class="auth-form" {
                    label for="name" { "Name" }
                    input type="text" id="name" name="name" autocomplete="name" required;

                    label for="email" { "Email" }
                    input type="email" id="email" name="email" autocomplete="email" required;

                    label for="phone" { "Phone" }
                    input type="tel" id="phone" name="phone" autocomplete="tel";

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" minlength="6" autocomplete="new-password" required;

                    button type="submit" class="primary" { "Create account" }
                }
            }
        },
    )
}
