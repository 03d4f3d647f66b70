//! Cart display data and the item-list template.
//!
//! Prices are pre-formatted into strings here so the template stays dumb.

use askama::Template;
use carrito_core::{Cart, LineItem, Price};
use rust_decimal::Decimal;

/// Cart item display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    /// Price times quantity, formatted for display.
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted sum of all line prices.
    pub total: String,
    /// Sum of quantities, shown on the badge.
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_price(Decimal::ZERO),
            item_count: 0,
        }
    }
}

/// Format an amount in the storefront currency.
fn format_price(amount: Decimal) -> String {
    Price::colones(amount).to_string()
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format_price(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            line_price: format_price(item.line_total()),
        }
    }
}

/// Item-list fragment template.
#[derive(Template)]
#[template(path = "cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_empty_cart_renders_placeholder() {
        let html = CartItemsTemplate {
            cart: CartView::empty(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Aún no hay productos."));
        assert!(!html.contains("Total:"));
    }

    #[test]
    fn test_items_render_with_line_prices_and_total() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add_item("Pan", dec(500), 3).unwrap();
        }
        cart.add_item("Aceite", dec(7000), 2).unwrap();

        let html = CartItemsTemplate {
            cart: CartView::from(&cart),
        }
        .render()
        .unwrap();

        assert!(html.contains("Pan x3"));
        assert!(html.contains("₡1500"));
        assert!(html.contains("Aceite x1"));
        assert!(html.contains("₡7000"));
        assert!(html.contains("Total:"));
        assert!(html.contains("₡8500"));
        assert!(!html.contains("Aún no hay productos."));
    }

    #[test]
    fn test_view_totals_match_cart() {
        let mut cart = Cart::new();
        cart.add_item("Pan", dec(500), 3).unwrap();
        cart.add_item("Pan", dec(500), 3).unwrap();

        let view = CartView::from(&cart);
        assert_eq!(view.total, "₡1000");
        assert_eq!(view.item_count, 2);
        assert_eq!(view.items.len(), 1);
    }
}
