//! Application services
//!
//! Services implement the player's use cases on top of port traits and
//! domain types.

pub mod catalog_service;

pub use catalog_service::CatalogService;
