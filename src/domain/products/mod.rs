//! Products

pub mod catalog;
pub mod models;

pub use catalog::ProductCatalog;
pub use models::Product;
