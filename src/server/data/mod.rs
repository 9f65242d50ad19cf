//! Database repository layer.
//!
//! Repositories handle the database operations for each table. They use SeaORM entity
//! models internally and leave conversion into domain models to the service layer.
//! Every method issues its queries on the shared connection pool; none opens a
//! multi-statement transaction.

pub mod category;
pub mod question;
