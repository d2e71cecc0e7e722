//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    domain::{
        carts::models::Cart,
        orders::{errors::OrderError, status::OrderStatus},
        users::models::UserId,
    },
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    #[serde(rename = "usuarioId")]
    pub user_id: UserId,

    #[serde(rename = "estado")]
    pub status: OrderStatus,

    pub total: u64,

    #[serde(rename = "creadoEn")]
    pub created_at: Timestamp,
}

impl Order {
    /// Open a pending order for the cart's owner, totalled from the cart's
    /// lines as they stand at `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for a cart without lines, or
    /// [`OrderError::Cart`] if the total overflows.
    pub fn checkout(id: OrderId, cart: &Cart, created_at: Timestamp) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart(cart.id.clone()));
        }

        let total = cart.total()?;

        debug!(order_id = %id, cart_id = %cart.id, total, "checked out cart");

        Ok(Self {
            id,
            user_id: cart.user_id.clone(),
            status: OrderStatus::Pending,
            total,
            created_at,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }
}
