//! Order errors.

use thiserror::Error;

use crate::domain::carts::{CartError, CartId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("cart {0} is empty")]
    EmptyCart(CartId),

    #[error("could not total cart: {0}")]
    Cart(#[from] CartError),
}
