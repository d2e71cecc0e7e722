//! Products

pub mod models;

pub use models::{Product, ProductId};
