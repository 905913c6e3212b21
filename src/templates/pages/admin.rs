use crate::db::leads::LeadRow;
use crate::db::users::User;
use crate::domain::format;
use crate::domain::leads::LeadKind;
use crate::templates::desktop_layout;
use maud::{html, Markup};

const TH: &str = "padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;";
const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

pub struct AdminVm {
    pub car_count: i64,
    pub user_count: i64,
    pub lead_count: i64,
    pub recent_leads: Vec<LeadRow>,
}

pub fn admin_nav() -> Markup {
    html! {
        nav class="admin-nav" style="display: flex; gap: 16px; margin-bottom: 1.5rem;" {
            a href="/admin" { "Dashboard" }
            a href="/admin/cars" { "Cars" }
            a href="/admin/news" { "News" }
            a href="/admin/users" { "Users" }
            a href="/admin/leads/export" { "Export leads (.xlsx)" }
        }
    }
}

pub fn admin_page(user: &User, vm: &AdminVm) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        Some(user),
        html! {
            main class="container" {
                h1 { "Admin Dashboard" }
                (admin_nav())

                div class="stats" style="display: flex; gap: 2rem; margin-bottom: 2rem;" {
                    div class="card" { h3 { "Cars" } p { (vm.car_count) } }
                    div class="card" { h3 { "Users" } p { (vm.user_count) } }
                    div class="card" { h3 { "Requests" } p { (vm.lead_count) } }
                }

                div class="card" {
                    h3 { "Recent requests" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    th style=(TH) { "Date" }
                                    th style=(TH) { "Type" }
                                    th style=(TH) { "Car" }
                                    th style=(TH) { "Name" }
                                    th style=(TH) { "Phone" }
                                    th style=(TH) { "Details" }
                                }
                            }
                            tbody {
                                @for lead in &vm.recent_leads {
                                    tr {
                                        td style=(TD) { (format::date_time(lead.created_at)) }
                                        td style=(TD) {
                                            (LeadKind::parse(&lead.kind).map(LeadKind::title).unwrap_or(lead.kind.as_str()))
                                        }
                                        td style=(TD) { (lead.car_name.as_deref().unwrap_or("(deleted)")) }
                                        td style=(TD) { (lead.name) }
                                        td style=(TD) { (lead.phone) }
                                        td style=(TD) {
                                            @if let Some(car) = &lead.trade_in_car {
                                                "Trade-in: " (car)
                                                br;
                                            }
                                            (lead.comment.as_deref().unwrap_or(""))
                                        }
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

pub fn admin_users_page(current: &User, users: &[User]) -> Markup {
    desktop_layout(
        "Users",
        Some(current),
        html! {
            main class="container" {
                h1 { "Users" }
                (admin_nav())

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                th style=(TH) { "ID" }
                                th style=(TH) { "Email" }
                                th style=(TH) { "Name" }
                                th style=(TH) { "Phone" }
                                th style=(TH) { "Role" }
                                th style=(TH) { "Last Login" }
                                th style=(TH) { "Actions" }
                            }
                        }
                        tbody {
                            @for u in users {
                                tr {
                                    td style=(TD) { (u.id) }
                                    td style=(TD) { (u.email) }
                                    td style=(TD) { (u.name) }
                                    td style=(TD) { (u.phone.as_deref().unwrap_or("")) }
                                    td style=(TD) {
                                        @if u.role.is_admin() {
                                            span style="background: #dbeafe; color: #1e40af; padding: 2px 6px; border-radius: 4px; font-size: 0.85em;" { (u.role.label()) }
                                        } @else {
                                            (u.role.label())
                                        }
                                    }
                                    td style=(format!("{TD} color: #6b7280; font-size: 0.9em;")) {
                                        @match u.last_login_at {
                                            Some(ts) => (format::date_time(ts)),
                                            None => "Never",
                                        }
                                    }
                                    td style=(TD) {
                                        @if u.id == current.id {
                                            span class="muted" { "You" }
                                        } @else {
                                            form action=(format!("/admin/users/{}/role", u.id)) method="post" style="display: inline-flex; gap: 6px; margin: 0;" {
                                                select name="role" {
                                                    option value="customer" selected[!u.role.is_admin()] { "Customer" }
                                                    option value="admin" selected[u.role.is_admin()] { "Admin" }
                                                }
                                                button type="submit" { "Set" }
                                            }
                                            form action=(format!("/admin/users/{}/delete", u.id)) method="post" onsubmit="return confirm('Delete this user?');" style="display: inline; margin: 0 0 0 8px;" {
                                                button type="submit" style="color: #dc2626; background: none; border: none; cursor: pointer;" { "Delete" }
                                            }
                                        }
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
