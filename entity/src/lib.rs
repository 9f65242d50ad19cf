//! SeaORM entities for the trivia database.

pub mod prelude;

pub mod category;
pub mod question;
