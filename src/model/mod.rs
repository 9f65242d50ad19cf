//! Wire types shared by every endpoint.
//!
//! DTOs in this module define the JSON bodies the service accepts and returns. They
//! carry no behaviour beyond serde and OpenAPI schema derivation.

pub mod api;
pub mod category;
pub mod question;
pub mod quiz;
