//! Carts

pub mod errors;
pub mod models;

pub use errors::CartError;
pub use models::{Cart, CartId, CartItem, CartItemId};
