use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

/// Oldest model year the admin form accepts.
pub const MIN_MODEL_YEAR: i32 = 1900;

/// Highest price the admin form accepts, in whole currency units.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

/// A car listing as the catalog sees it.
///
/// The catalog treats every field as read-only; create/update/delete happen in
/// `db::cars`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Whole currency units.
    pub price: i64,
    /// 0 means new.
    pub mileage: i64,
    pub body_type: String,
    pub status: String,

    // Storefront details, ignored by the filter engine.
    pub color: Option<String>,
    pub engine: Option<String>,
    pub transmission: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
}

impl Vehicle {
    /// "Toyota Camry"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    pub fn is_new(&self) -> bool {
        self.mileage == 0
    }
}

/// Editable fields of a car, as submitted from the admin form.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDraft {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub mileage: i64,
    pub body_type: String,
    pub status: String,
    pub color: Option<String>,
    pub engine: Option<String>,
    pub transmission: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl VehicleDraft {
    /// Validates the admin car form.
    pub fn from_form(form: &HashMap<String, String>) -> Result<VehicleDraft, ServerError> {
        let optional = |key: &str| {
            form.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            optional(key).ok_or_else(|| ServerError::BadRequest(format!("{key} is required")))
        };
        let number = |key: &str| -> Result<Option<i64>, ServerError> {
            optional(key)
                .map(|v| {
                    v.parse::<i64>()
                        .map_err(|_| ServerError::BadRequest(format!("{key} must be a whole number")))
                })
                .transpose()
        };

        let year = number("year")?
            .ok_or_else(|| ServerError::BadRequest("year is required".into()))?;
        if year < MIN_MODEL_YEAR as i64 || year > i32::MAX as i64 {
            return Err(ServerError::BadRequest(format!(
                "year must be {MIN_MODEL_YEAR} or later"
            )));
        }

        let price = number("price")?
            .ok_or_else(|| ServerError::BadRequest("price is required".into()))?;
        if price < 0 {
            return Err(ServerError::BadRequest("price cannot be negative".into()));
        }
        if price > MAX_PRICE {
            return Err(ServerError::BadRequest(format!("price cannot exceed {MAX_PRICE}")));
        }

        let mileage = number("mileage")?.unwrap_or(0);
        if mileage < 0 {
            return Err(ServerError::BadRequest("mileage cannot be negative".into()));
        }

        Ok(VehicleDraft {
            brand: required("brand")?,
            model: required("model")?,
            year: year as i32,
            price,
            mileage,
            body_type: required("body_type")?,
            status: required("status")?,
            color: optional("color"),
            engine: optional("engine"),
            transmission: optional("transmission"),
            description: optional("description"),
            image_url: optional("image_url"),
        })
    }
}

#[cfg(test)]
pub fn sample(id: i64, brand: &str, model: &str, year: i32, price: i64) -> Vehicle {
    Vehicle {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        price,
        mileage: 0,
        body_type: "SUV".to_string(),
        status: "In stock".to_string(),
        color: None,
        engine: None,
        transmission: None,
        description: None,
        image_url: None,
        created_at: 0,
    }
}
