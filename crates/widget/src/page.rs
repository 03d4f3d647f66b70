//! Host-page abstraction the widget renders into.
//!
//! A [`Page`] is a minimal stand-in for the document hosting the widget:
//! elements addressed by id, an alert channel (the blocking-modal stand-in),
//! and a reload-requested flag. Hosts register the containers they actually
//! have; rendering into an absent container is a silent no-op.

use std::collections::BTreeMap;

/// Element ids of the page contract.
pub mod element_ids {
    /// Container the item-list fragment is rendered into.
    pub const CART_ITEMS: &str = "cart-items";

    /// Cart icon the count badge is attached to.
    pub const CART_ICON: &str = "cartDropdown";

    /// Count badge, created lazily on first render.
    pub const CART_BADGE: &str = "cart-count-nav";
}

/// One addressable element of the host page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Inner HTML of the element.
    pub html: String,
    /// Text content of the element.
    pub text: String,
    style: BTreeMap<String, String>,
}

impl Element {
    /// Set an inline style property.
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    /// Read an inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// The page the widget is mounted on.
#[derive(Debug, Default)]
pub struct Page {
    elements: BTreeMap<String, Element>,
    alerts: Vec<String>,
    reload_requested: bool,
}

impl Page {
    /// Create a page with no elements.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            alerts: Vec::new(),
            reload_requested: false,
        }
    }

    /// Builder-style registration of an element id.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.insert_element(id);
        self
    }

    /// Register an (empty) element under `id`.
    pub fn insert_element(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    /// Whether an element with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Look up an element.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Look up an element for mutation.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Look up an element, creating it if absent.
    pub fn get_or_create_element(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    /// Surface a blocking user-visible alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// Alerts raised so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Ask the host to reload the page.
    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// Whether a reload has been requested.
    #[must_use]
    pub const fn reload_requested(&self) -> bool {
        self.reload_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_element_is_found() {
        let page = Page::new().with_element(element_ids::CART_ITEMS);
        assert!(page.contains(element_ids::CART_ITEMS));
        assert!(!page.contains(element_ids::CART_ICON));
    }

    #[test]
    fn test_get_or_create_element_is_idempotent() {
        let mut page = Page::new();
        page.get_or_create_element(element_ids::CART_BADGE).text = "3".to_string();
        let badge = page.get_or_create_element(element_ids::CART_BADGE);
        assert_eq!(badge.text, "3");
    }

    #[test]
    fn test_styles_are_readable_back() {
        let mut page = Page::new();
        let badge = page.get_or_create_element(element_ids::CART_BADGE);
        badge.set_style("position", "absolute");
        assert_eq!(
            page.element(element_ids::CART_BADGE)
                .and_then(|e| e.style("position")),
            Some("absolute")
        );
    }

    #[test]
    fn test_alerts_accumulate_in_order() {
        let mut page = Page::new();
        page.alert("uno");
        page.alert("dos");
        assert_eq!(page.alerts(), ["uno", "dos"]);
    }

    #[test]
    fn test_reload_flag() {
        let mut page = Page::new();
        assert!(!page.reload_requested());
        page.request_reload();
        assert!(page.reload_requested());
    }
}
