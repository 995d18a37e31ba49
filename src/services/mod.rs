// Service exports
pub mod catalog;
pub mod contact;

pub use catalog::{CatalogError, PropertyCatalog};
pub use contact::ContactService;
