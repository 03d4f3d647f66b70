//! The cart widget controller.
//!
//! `CartWidget` owns the cart, the injected storage, the checkout client,
//! and the page it renders into. Every mutation persists the cart and
//! re-renders; user-visible conditions surface as page alerts, never as
//! `Err` values.

use askama::Template;
use carrito_core::{Cart, StockExhausted};
use rust_decimal::Decimal;

use crate::checkout::{CheckoutClient, CheckoutStatus};
use crate::error::Result;
use crate::page::{Page, element_ids};
use crate::storage::{CartStorage, KeyValueStore};
use crate::views::{CartItemsTemplate, CartView};

/// What happened on an add-item click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was added (or its quantity incremented).
    Added,
    /// The stock ceiling was hit; the cart is unchanged.
    StockExhausted,
}

/// What happened on a checkout click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing was sent; the cart was empty.
    EmptyCart,
    /// The server accepted the order; the cart was cleared.
    Completed,
    /// The server rejected the order; the cart is unchanged.
    Rejected,
    /// The request never completed; the cart is unchanged.
    TransportFailed,
}

/// Cart manager: state, persistence, rendering, and checkout.
#[derive(Debug)]
pub struct CartWidget<S> {
    cart: Cart,
    storage: CartStorage<S>,
    checkout: CheckoutClient,
    page: Page,
}

impl<S: KeyValueStore> CartWidget<S> {
    /// Mount the widget: restore the persisted cart and render it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the initial render
    /// fails.
    pub fn mount(
        storage: CartStorage<S>,
        checkout: CheckoutClient,
        page: Page,
    ) -> Result<Self> {
        let cart = storage.load()?;
        let mut widget = Self {
            cart,
            storage,
            checkout,
            page,
        };
        widget.render()?;
        Ok(widget)
    }

    /// Add one unit of a product, then persist and re-render.
    ///
    /// Hitting the stock ceiling raises the user-visible alert and leaves
    /// cart, storage, and page content unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting or re-rendering fails.
    pub fn add_item(&mut self, name: &str, price: Decimal, stock: u32) -> Result<AddOutcome> {
        match self.cart.add_item(name, price, stock) {
            Ok(()) => {
                self.storage.save(&self.cart)?;
                self.render()?;
                Ok(AddOutcome::Added)
            }
            Err(StockExhausted { name }) => {
                self.page
                    .alert(format!("No hay más stock disponible para {name}"));
                Ok(AddOutcome::StockExhausted)
            }
        }
    }

    /// Rebuild the item-list fragment and the count badge.
    ///
    /// The whole render is a silent no-op when the item container is absent
    /// from the page. Idempotent given unchanged cart state.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&mut self) -> Result<()> {
        if !self.page.contains(element_ids::CART_ITEMS) {
            return Ok(());
        }

        let html = CartItemsTemplate {
            cart: CartView::from(&self.cart),
        }
        .render()?;
        if let Some(container) = self.page.element_mut(element_ids::CART_ITEMS) {
            container.html = html;
        }

        self.render_badge();
        Ok(())
    }

    /// Submit the cart for order finalization.
    ///
    /// An empty cart raises the user-visible alert and sends nothing. A
    /// success response clears the cart, persists the empty state,
    /// re-renders, and requests a page reload so the host picks up the
    /// server-side stock changes. A rejection alerts the server message and
    /// leaves state untouched. A transport failure is logged only.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting or re-rendering the cleared cart
    /// fails.
    pub async fn checkout(&mut self) -> Result<CheckoutOutcome> {
        if self.cart.is_empty() {
            self.page.alert("Tu carrito está vacío.");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        match self.checkout.finalize(&self.cart).await {
            Ok(response) => match response.status {
                CheckoutStatus::Success => {
                    self.page.alert("Compra finalizada correctamente.");
                    self.cart.clear();
                    self.storage.save(&self.cart)?;
                    self.render()?;
                    self.page.request_reload();
                    Ok(CheckoutOutcome::Completed)
                }
                CheckoutStatus::Error => {
                    let message = response
                        .message
                        .unwrap_or_else(|| "No se pudo completar la compra.".to_string());
                    self.page.alert(message);
                    Ok(CheckoutOutcome::Rejected)
                }
            },
            Err(error) => {
                tracing::error!(%error, "checkout request failed");
                Ok(CheckoutOutcome::TransportFailed)
            }
        }
    }

    /// Current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The page the widget renders into.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    fn render_badge(&mut self) {
        if !self.page.contains(element_ids::CART_ICON) {
            return;
        }

        if !self.page.contains(element_ids::CART_BADGE) {
            // First render: pin the badge to the icon's corner.
            if let Some(icon) = self.page.element_mut(element_ids::CART_ICON) {
                icon.set_style("position", "relative");
            }
            let badge = self.page.get_or_create_element(element_ids::CART_BADGE);
            badge.set_style("position", "absolute");
            badge.set_style("top", "-5px");
            badge.set_style("right", "-10px");
            badge.set_style("background", "red");
            badge.set_style("color", "#fff");
            badge.set_style("font-size", "0.75rem");
            badge.set_style("padding", "3px 6px");
            badge.set_style("border-radius", "50%");
            badge.set_style("font-weight", "bold");
        }

        let count = self.cart.item_count();
        if let Some(badge) = self.page.element_mut(element_ids::CART_BADGE) {
            badge.text = count.to_string();
        }
    }
}
