//! Cart errors.

use thiserror::Error;

use crate::domain::{carts::models::CartItemId, products::models::ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("quantity must be at least one")]
    InvalidQuantity,

    #[error("product {0} is not available")]
    ProductUnavailable(ProductId),

    #[error("cart item {0} not found")]
    ItemNotFound(CartItemId),

    #[error("amount exceeds the representable range")]
    AmountOverflow,
}
