//! Cart Models

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    domain::{
        carts::errors::CartError,
        products::models::{Product, ProductId},
        users::models::UserId,
    },
    ids::TypedId,
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Item Id
pub type CartItemId = TypedId<CartItem>;

/// Cart Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,

    #[serde(rename = "usuarioId")]
    pub user_id: UserId,

    #[serde(rename = "productos")]
    pub items: Vec<CartItem>,
}

/// Cart line. The unit price is a snapshot taken when the product was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,

    #[serde(rename = "productoId")]
    pub product_id: ProductId,

    #[serde(rename = "cantidad")]
    pub quantity: u32,

    #[serde(rename = "precioUnitario")]
    pub unit_price: u64,
}

impl CartItem {
    /// Quantity times the captured unit price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::AmountOverflow`] if the product does not fit in a `u64`.
    pub fn line_total(&self) -> Result<u64, CartError> {
        self.unit_price
            .checked_mul(u64::from(self.quantity))
            .ok_or(CartError::AmountOverflow)
    }
}

impl Cart {
    #[must_use]
    pub fn new(id: CartId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of every line total.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::AmountOverflow`] if any line or the running sum overflows.
    pub fn total(&self) -> Result<u64, CartError> {
        self.items.iter().try_fold(0_u64, |total, item| {
            total
                .checked_add(item.line_total()?)
                .ok_or(CartError::AmountOverflow)
        })
    }

    /// Add `quantity` units of `product`, merging into an existing line for
    /// the same product.
    ///
    /// A merged line keeps the price it captured first.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero quantity, an inactive product, or a
    /// quantity that overflows the existing line.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<CartItem, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        if !product.active {
            return Err(CartError::ProductUnavailable(product.id.clone()));
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            item.quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::AmountOverflow)?;

            debug!(cart_id = %self.id, product_id = %product.id, quantity = item.quantity, "merged cart line");

            return Ok(item.clone());
        }

        let item = CartItem {
            id: CartItemId::generate(),
            product_id: product.id.clone(),
            quantity,
            unit_price: product.price,
        };

        self.items.push(item.clone());

        Ok(item)
    }

    /// Remove a line by id, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when no line carries `item`.
    pub fn remove_item(&mut self, item: &CartItemId) -> Result<CartItem, CartError> {
        let position = self
            .items
            .iter()
            .position(|line| line.id == *item)
            .ok_or_else(|| CartError::ItemNotFound(item.clone()))?;

        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
