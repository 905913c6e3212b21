use crate::db::users::User;
use crate::domain::catalog::{CatalogFacets, FilterQuery};
use crate::domain::vehicle::Vehicle;
use crate::templates::components::{alert, car_grid};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CatalogVm {
    pub query: FilterQuery,
    pub facets: CatalogFacets,
    pub cars: Vec<Vehicle>,
    /// Set when the query was rejected and the unfiltered catalog is shown.
    pub error: Option<String>,
}

fn select(name: &str, label: &str, options: &[String], current: Option<&str>) -> Markup {
    html! {
        label {
            (label)
            select name=(name) {
                option value="" { "Any" }
                @for o in options {
                    option value=(o) selected[current == Some(o.as_str())] { (o) }
                }
            }
        }
    }
}

pub fn catalog_page(user: Option<&User>, vm: &CatalogVm) -> Markup {
    let q = &vm.query;
    let years: Vec<String> = vm.facets.years.iter().map(|y| y.to_string()).collect();
    let min_year = q.min_year.map(|y| y.to_string());

    desktop_layout(
        "Catalog",
        user,
        html! {
            main class="container catalog" {
                h1 { "Catalog" }

                form action="/catalog" method="get" class="filters" {
                    label {
                        "Search"
                        input type="search" name="search" value=[q.search.as_deref()] placeholder="Brand or model";
                    }
                    (select("brand", "Brand", &vm.facets.brands, q.brand.as_deref()))
                    (select("body_type", "Body", &vm.facets.body_types, q.body_type.as_deref()))
                    (select("min_year", "Year from", &years, min_year.as_deref()))
                    label {
                        "Price from"
                        input type="number" name="min_price" value=[q.min_price] step="1";
                    }
                    label {
                        "Price to"
                        input type="number" name="max_price" value=[q.max_price] step="1";
                    }
                    (select("status", "Status", &vm.facets.statuses, q.status.as_deref()))
                    button type="submit" class="primary" { "Apply" }
                    @if !q.is_empty() {
                        a href="/catalog" { "Reset" }
                    }
                }

                @if let Some(err) = &vm.error {
                    (alert(err))
                }

                p class="muted" { "Found: " (vm.cars.len()) }
                (car_grid(&vm.cars))
            }
        },
    )
}
