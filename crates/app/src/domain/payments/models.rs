//! Payment Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        orders::models::{Order, OrderId},
        payments::status::PaymentStatus,
    },
    ids::TypedId,
};

/// Payment Id
pub type PaymentId = TypedId<Payment>;

/// Payment Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,

    #[serde(rename = "pedidoId")]
    pub order_id: OrderId,

    #[serde(rename = "monto")]
    pub amount: u64,

    #[serde(rename = "estado")]
    pub status: PaymentStatus,

    #[serde(rename = "fecha")]
    pub date: Timestamp,
}

impl Payment {
    /// Pending payment for the full order total.
    #[must_use]
    pub fn pending(id: PaymentId, order: &Order, date: Timestamp) -> Self {
        Self {
            id,
            order_id: order.id.clone(),
            amount: order.total,
            status: PaymentStatus::Pending,
            date,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.status.is_terminal()
    }
}
