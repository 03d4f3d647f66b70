//! Unified error handling for the widget.
//!
//! User-visible failures (stock exhausted, empty cart, server rejection)
//! are not errors - they surface as page alerts. `WidgetError` covers the
//! programmatic failures: storage I/O, template rendering, and checkout
//! transport when a caller drives the client directly.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::storage::StorageError;

/// Component-level error type for the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Persisting or restoring the cart failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Rendering the item-list fragment failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Checkout request failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_error_display() {
        let err = WidgetError::from(StorageError::InvalidFormat(
            "expected a JSON object".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "storage error: invalid storage document: expected a JSON object"
        );
    }
}
