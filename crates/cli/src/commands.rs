//! Widget-driving commands.
//!
//! Each invocation mounts the widget over the file store, performs one
//! operation (one "click"), and prints the resulting page to stdout.

use carrito_widget::{
    CartStorage, CartWidget, CheckoutClient, FileStore, Page, WidgetConfig, element_ids,
};
use rust_decimal::Decimal;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Mount the widget over the configured file store.
fn mount() -> Result<CartWidget<FileStore>> {
    let config = WidgetConfig::from_env()?;
    let store = FileStore::open(&config.storage_path)?;
    let storage = CartStorage::new(store, config.storage_key.clone());
    let checkout = CheckoutClient::new(&config);
    let page = Page::new()
        .with_element(element_ids::CART_ITEMS)
        .with_element(element_ids::CART_ICON);
    Ok(CartWidget::mount(storage, checkout, page)?)
}

/// Add one unit of a product to the cart.
pub fn add(name: &str, price: Decimal, stock: u32) -> Result<()> {
    let mut widget = mount()?;
    widget.add_item(name, price, stock)?;
    print_page(widget.page());
    Ok(())
}

/// Render the current cart.
pub fn show() -> Result<()> {
    let widget = mount()?;
    print_page(widget.page());
    Ok(())
}

/// Submit the cart for order finalization.
pub async fn checkout() -> Result<()> {
    let mut widget = mount()?;
    widget.checkout().await?;
    print_page(widget.page());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_page(page: &Page) {
    for alert in page.alerts() {
        println!("¡Aviso! {alert}");
    }
    if let Some(container) = page.element(element_ids::CART_ITEMS) {
        println!("{}", container.html.trim_end());
    }
    if let Some(badge) = page.element(element_ids::CART_BADGE) {
        println!("[{} en el carrito]", badge.text);
    }
    if page.reload_requested() {
        println!("(recargá la página para ver el stock actualizado)");
    }
}
