//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They apply the
//! not-found and unprocessable policies, assemble listing context (totals, category
//! mappings) and own quiz question selection. They work with domain models rather
//! than DTOs or entity models.

pub mod category;
pub mod question;
pub mod quiz;
