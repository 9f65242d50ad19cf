//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry request input
//! that has already passed validation.

pub mod category;
pub mod question;
pub mod quiz;
