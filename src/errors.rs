// errors.rs
use astra::Response;
use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::quote::QuoteError;

/// Errors originating from either the server logic
/// (routing, missing resources, auth) or downstream layers (DB, XLSX).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden")]
    Forbidden,
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<QuoteError> for ServerError {
    fn from(e: QuoteError) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

impl From<CatalogError> for ServerError {
    fn from(e: CatalogError) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Forbidden => 403,
            ServerError::DbError(_) | ServerError::InternalError | ServerError::XlsxError(_) => 500,
        }
    }
}
