// src/domain/catalog.rs

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use thiserror::Error;

use crate::domain::vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidPriceRange(String),
}

/// Structured catalog query. Every field is optional and an absent field
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub body_type: Option<String>,
    pub min_year: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub status: Option<String>,
}

impl FilterQuery {
    /// Builds a query from request parameters (`search`, `brand`, `body_type`,
    /// `min_year`, `min_price`, `max_price`, `status`).
    ///
    /// Blank values and numbers that don't parse are treated as absent, so an
    /// untouched `<select>` or an empty input never narrows the result.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            search: text("search"),
            brand: text("brand"),
            body_type: text("body_type"),
            min_year: text("min_year").and_then(|v| v.parse().ok()),
            min_price: text("min_price").and_then(|v| v.parse().ok()),
            max_price: text("max_price").and_then(|v| v.parse().ok()),
            status: text("status"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterQuery::default()
    }

    /// Rejects negative price bounds. Each bound is checked on its own;
    /// `min_price > max_price` is accepted and simply matches nothing.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.min_price.is_some_and(|p| p < 0) {
            return Err(CatalogError::InvalidPriceRange(
                "Minimum price cannot be negative".into(),
            ));
        }
        if self.max_price.is_some_and(|p| p < 0) {
            return Err(CatalogError::InvalidPriceRange(
                "Maximum price cannot be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn matches(&self, v: &Vehicle) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !v.brand.to_lowercase().contains(&term) && !v.model.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if self.brand.as_ref().is_some_and(|b| *b != v.brand) {
            return false;
        }
        if self.body_type.as_ref().is_some_and(|b| *b != v.body_type) {
            return false;
        }
        if self.min_year.is_some_and(|y| v.year < y) {
            return false;
        }
        if self.min_price.is_some_and(|p| v.price < p) {
            return false;
        }
        if self.max_price.is_some_and(|p| v.price > p) {
            return false;
        }
        if self.status.as_ref().is_some_and(|s| *s != v.status) {
            return false;
        }
        true
    }
}

/// Narrows `vehicles` to those matching every present predicate of `query`.
///
/// Validation runs first and short-circuits. The input order is preserved;
/// callers supply the collection newest first.
pub fn filter_catalog(
    vehicles: &[Vehicle],
    query: &FilterQuery,
) -> Result<Vec<Vehicle>, CatalogError> {
    query.validate()?;

    Ok(vehicles
        .iter()
        .filter(|v| query.matches(v))
        .cloned()
        .collect())
}

/// Distinct values for the catalog's filter dropdowns.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct CatalogFacets {
    pub brands: Vec<String>,
    pub body_types: Vec<String>,
    pub statuses: Vec<String>,
    /// Newest first.
    pub years: Vec<i32>,
}

pub fn catalog_facets(vehicles: &[Vehicle]) -> CatalogFacets {
    let mut brands = BTreeSet::new();
    let mut body_types = BTreeSet::new();
    let mut statuses = BTreeSet::new();
    let mut years = BTreeSet::new();

    for v in vehicles {
        brands.insert(v.brand.clone());
        body_types.insert(v.body_type.clone());
        statuses.insert(v.status.clone());
        years.insert(v.year);
    }

    CatalogFacets {
        brands: brands.into_iter().collect(),
        body_types: body_types.into_iter().collect(),
        statuses: statuses.into_iter().collect(),
        years: years.into_iter().rev().collect(),
    }
}
