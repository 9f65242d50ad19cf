//! HTTP request handlers.
//!
//! Controllers interpret path, query and body input, convert it into validated
//! parameters, call the service layer and wrap results in the `success` envelope.
//! Each handler also decides how failures surface: read-only listings report store
//! failures as 500, everything else collapses them into 422.

pub mod category;
pub mod question;
pub mod quiz;

use crate::server::error::AppError;

/// Fallback for routes that do not exist.
pub async fn not_found() -> AppError {
    AppError::NotFound("No route matches the request".to_string())
}

#[cfg(test)]
mod test;
