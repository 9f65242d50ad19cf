//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let category = factory::category::create_category(&db).await?;
//!     let question = factory::question::create_question(&db, category.id).await?;
//!
//!     // Seed the standard data set
//!     let (categories, questions) = factory::helpers::seed_trivia(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let question = factory::question::QuestionFactory::new(&db)
//!     .question("Who painted the Mona Lisa?")
//!     .category("2")
//!     .difficulty(2)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod question;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use helpers::{seed_default_categories, seed_trivia};
pub use question::create_question;
