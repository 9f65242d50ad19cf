pub use super::category::Entity as Category;
pub use super::question::Entity as Question;
