pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::{html_response, html_response_with_status, redirect, redirect_with_cookie};
pub use json::json_response;
pub use xlsx::xlsx_response;
