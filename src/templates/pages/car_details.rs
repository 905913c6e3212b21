use crate::db::users::User;
use crate::domain::format;
use crate::domain::leads::LeadKind;
use crate::domain::quote::{LoanQuote, MAX_TERM_MONTHS, MIN_TERM_MONTHS};
use crate::domain::vehicle::Vehicle;
use crate::templates::components::{alert, notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CarDetailsVm {
    pub car: Vehicle,
    pub down_payment: i64,
    pub term_months: u32,
    pub annual_rate: f64,
    /// Calculator result, or the message explaining why it can't be computed.
    pub quote: Result<LoanQuote, String>,
    pub is_favorite: bool,
    pub notice: Option<String>,
}

fn spec_row(label: &str, value: Option<&str>) -> Markup {
    html! {
        @if let Some(v) = value {
            tr { th { (label) } td { (v) } }
        }
    }
}

fn quote_summary(q: &LoanQuote) -> Markup {
    html! {
        dl class="quote" {
            dt { "Loan amount" } dd { (format::money(q.loan_amount)) }
            dt { "Monthly payment" } dd class="accent" { (format::money(q.monthly_payment)) }
            dt { "Overpayment" } dd { (format::money(q.overpayment)) }
            dt { "Total cost" } dd { (format::money(q.total_amount)) }
        }
    }
}

fn lead_form(car_id: i64, kind: LeadKind, user: Option<&User>) -> Markup {
    html! {
        form action=(format!("/cars/{car_id}/leads")) method="post" class="lead-form" {
            h3 { (kind.title()) }
            input type="hidden" name="kind" value=(kind.as_str());
            input type="text" name="name" placeholder="Your name" value=[user.map(|u| u.name.as_str())] required;
            input type="tel" name="phone" placeholder="Phone" value=[user.and_then(|u| u.phone.as_deref())] required;
            @if kind == LeadKind::TradeIn {
                input type="text" name="trade_in_car" placeholder="Your current car: brand, model, year" required;
            }
            textarea name="comment" placeholder="Comment" {}
            button type="submit" class="primary" { "Send request" }
        }
    }
}

pub fn car_details_page(user: Option<&User>, vm: &CarDetailsVm) -> Markup {
    let car = &vm.car;
    let year = car.year.to_string();
    let mileage = format::mileage(car.mileage);

    desktop_layout(
        &car.display_name(),
        user,
        html! {
            main class="container car-details" {
                @if let Some(msg) = &vm.notice {
                    (notice(msg))
                }

                h1 { (car.display_name()) }
                p class="price" { (format::money(car.price)) }

                @if let Some(src) = &car.image_url {
                    img class="hero-image" src=(src) alt=(car.display_name());
                }

                form action=(format!("/cars/{}/favorite", car.id)) method="post" {
                    button type="submit" class="link" {
                        @if vm.is_favorite { "♥ Remove from favorites" } @else { "♡ Add to favorites" }
                    }
                }

                table class="specs" {
                    (spec_row("Year", Some(&year)))
                    (spec_row("Mileage", Some(&mileage)))
                    (spec_row("Body", Some(&car.body_type)))
                    (spec_row("Status", Some(&car.status)))
                    (spec_row("Color", car.color.as_deref()))
                    (spec_row("Engine", car.engine.as_deref()))
                    (spec_row("Transmission", car.transmission.as_deref()))
                }

                @if let Some(d) = &car.description {
                    p class="description" { (d) }
                }

                section class="card calculator" id="credit" {
                    h2 { "Credit calculator" }
                    form action=(format!("/cars/{}#credit", car.id)) method="get" {
                        label {
                            "Down payment"
                            input type="number" name="down" min="0" step="1" value=(vm.down_payment);
                        }
                        label {
                            "Term, months"
                            input type="number" name="term" min=(MIN_TERM_MONTHS) max=(MAX_TERM_MONTHS) value=(vm.term_months);
                        }
                        label {
                            "Rate, % per year"
                            input type="number" name="rate" min="0" step="0.1" value=(vm.annual_rate);
                        }
                        button type="submit" { "Calculate" }
                    }
                    @match &vm.quote {
                        Ok(q) => (quote_summary(q)),
                        Err(msg) => (alert(msg)),
                    }
                }

                section class="leads" {
                    (lead_form(car.id, LeadKind::TestDrive, user))
                    (lead_form(car.id, LeadKind::TradeIn, user))
                    (lead_form(car.id, LeadKind::Purchase, user))
                }
            }
        },
    )
}

/// Shown after a lead form is submitted.
pub fn lead_received_page(user: Option<&User>, car: &Vehicle, kind: LeadKind) -> Markup {
    desktop_layout(
        "Request received",
        user,
        html! {
            main class="container narrow" {
                h1 { "Thank you!" }
                p {
                    "Your " (kind.title().to_lowercase()) " request for "
                    strong { (car.display_name()) }
                    " has been received. Our manager will call you shortly."
                }
                p { a href=(format!("/cars/{}", car.id)) { "← Back to the car" } }
            }
        },
    )
}
