//! HTTP client for the order-finalization endpoint.
//!
//! The contract is a single POST with the full cart as JSON
//! (`{"carrito": [...]}`) answered by `{status, message?}`. The server
//! reports business failures (insufficient stock, no session) as JSON
//! bodies on non-2xx responses, so the body is parsed regardless of the
//! HTTP status.

use carrito_core::{Cart, LineItem};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::config::WidgetConfig;

/// Errors that can occur when submitting the cart.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status and no parseable body.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a successful response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Wire body of the checkout request.
#[derive(Debug, Serialize)]
struct CheckoutRequest<'a> {
    carrito: &'a [LineItem],
}

/// Outcome reported by the endpoint.
///
/// The contract is `"success"` or anything else; unknown strings are
/// rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CheckoutStatus {
    /// The order was registered and stock was decremented.
    Success,
    /// Any other status string is a rejection.
    Error,
}

impl From<String> for CheckoutStatus {
    fn from(status: String) -> Self {
        if status == "success" {
            Self::Success
        } else {
            Self::Error
        }
    }
}

/// Response of the order-finalization endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    pub status: CheckoutStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the order-finalization endpoint.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CheckoutClient {
    /// Create a new checkout client.
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.checkout_url.to_string(),
        }
    }

    /// Endpoint the cart is submitted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the full cart for order finalization.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` if the request cannot be sent or the
    /// response body is not the expected JSON.
    #[instrument(skip(self, cart), fields(items = cart.len()))]
    pub async fn finalize(&self, cart: &Cart) -> Result<CheckoutResponse, CheckoutError> {
        let body = CheckoutRequest {
            carrito: cart.items(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                CheckoutError::Parse(e.to_string())
            } else {
                CheckoutError::Api {
                    status: status.as_u16(),
                    message: text,
                }
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_request_body_shape() {
        let mut cart = Cart::new();
        cart.add_item("Pan", Decimal::from(500), 3).unwrap();

        let body = CheckoutRequest {
            carrito: cart.items(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "carrito": [{"name": "Pan", "price": 500.0, "quantity": 1, "stock": 3}]
            })
        );
    }

    #[test]
    fn test_success_response_parses() {
        let response: CheckoutResponse =
            serde_json::from_str(r#"{"status": "success", "message": "Compra registrada correctamente."}"#)
                .unwrap();
        assert_eq!(response.status, CheckoutStatus::Success);
        assert_eq!(
            response.message.as_deref(),
            Some("Compra registrada correctamente.")
        );
    }

    #[test]
    fn test_any_other_status_is_an_error() {
        let response: CheckoutResponse =
            serde_json::from_str(r#"{"status": "error", "message": "Carrito vacío."}"#).unwrap();
        assert_eq!(response.status, CheckoutStatus::Error);

        let response: CheckoutResponse =
            serde_json::from_str(r#"{"status": "rechazado"}"#).unwrap();
        assert_eq!(response.status, CheckoutStatus::Error);
        assert_eq!(response.message, None);
    }
}
