//! Line items and the cart.
//!
//! A [`Cart`] is an ordered sequence of [`LineItem`]s keyed by product name,
//! at most one entry per name. Adding an already-present name increments its
//! quantity, bounded by the stock ceiling recorded when the item was first
//! added. The serialized form (both persisted and on the wire) is a JSON
//! array of `{name, price, quantity, stock}` objects with `price` a number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Adding would push an item's quantity past its stock ceiling.
///
/// The cart is left unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no stock available for {name}")]
pub struct StockExhausted {
    /// Name of the exhausted item.
    pub name: String,
}

/// One named product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, unique within the cart.
    pub name: String,
    /// Unit price in the storefront currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units of this item in the cart. Always at least 1.
    pub quantity: u32,
    /// Stock ceiling: availability snapshotted when the item was first added.
    pub stock: u32,
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Ordered collection of line items, at most one entry per product name.
///
/// Created empty (or restored from persisted storage) on mount; mutated only
/// by [`Cart::add_item`] and cleared entirely on successful checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If an entry with `name` already exists its quantity is incremented,
    /// provided it is still below the stock ceiling recorded at first add;
    /// the `price` and `stock` arguments are ignored in that case. A new
    /// entry starts at quantity 1, which means a stock ceiling of zero is
    /// rejected outright.
    ///
    /// # Errors
    ///
    /// Returns [`StockExhausted`] when the add would exceed the ceiling. The
    /// cart is unchanged in that case.
    pub fn add_item(
        &mut self,
        name: &str,
        price: Decimal,
        stock: u32,
    ) -> Result<(), StockExhausted> {
        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            if existing.quantity < existing.stock {
                existing.quantity += 1;
                Ok(())
            } else {
                Err(StockExhausted {
                    name: name.to_string(),
                })
            }
        } else if stock == 0 {
            Err(StockExhausted {
                name: name.to_string(),
            })
        } else {
            self.items.push(LineItem {
                name: name.to_string(),
                price,
                quantity: 1,
                stock,
            });
            Ok(())
        }
    }

    /// Sum of price times quantity over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all items (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}
