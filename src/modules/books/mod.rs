//! Catalog items.

pub mod models;

pub use models::Book;
