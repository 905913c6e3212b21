// src/domain/leads.rs

use std::collections::HashMap;

use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    TestDrive,
    TradeIn,
    Purchase,
}

impl LeadKind {
    pub fn parse(value: &str) -> Option<LeadKind> {
        match value {
            "test_drive" => Some(LeadKind::TestDrive),
            "trade_in" => Some(LeadKind::TradeIn),
            "purchase" => Some(LeadKind::Purchase),
            _ => None,
        }
    }

    /// Value stored in the `leads.kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            LeadKind::TestDrive => "test_drive",
            LeadKind::TradeIn => "trade_in",
            LeadKind::Purchase => "purchase",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LeadKind::TestDrive => "Test drive",
            LeadKind::TradeIn => "Trade-in",
            LeadKind::Purchase => "Purchase",
        }
    }
}

/// A validated request from one of the forms on the car details page.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub kind: LeadKind,
    pub name: String,
    pub phone: String,
    pub comment: Option<String>,
    /// The customer's current car, required for trade-in.
    pub trade_in_car: Option<String>,
}

impl Lead {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Lead, ServerError> {
        let field = |key: &str| {
            form.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let kind = field("kind")
            .as_deref()
            .and_then(LeadKind::parse)
            .ok_or_else(|| ServerError::BadRequest("unknown request type".into()))?;

        let name = field("name").ok_or_else(|| ServerError::BadRequest("name is required".into()))?;
        let phone =
            field("phone").ok_or_else(|| ServerError::BadRequest("phone is required".into()))?;

        let trade_in_car = field("trade_in_car");
        if kind == LeadKind::TradeIn && trade_in_car.is_none() {
            return Err(ServerError::BadRequest(
                "describe the car you want to trade in".into(),
            ));
        }

        Ok(Lead {
            kind,
            name,
            phone,
            comment: field("comment"),
            trade_in_car,
        })
    }
}
