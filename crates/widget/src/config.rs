//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CARRITO_CHECKOUT_URL` - Order-finalization endpoint, e.g.
//!   `https://shop.example.com/finalizar_compra`
//!
//! ## Optional
//! - `CARRITO_STORAGE_PATH` - Cart storage file (default: carrito.json)
//! - `CARRITO_STORAGE_KEY` - Key the cart is stored under (default: cart)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Key the serialized cart lives under in the store.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Default storage file, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "carrito.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Order-finalization endpoint the cart is submitted to.
    pub checkout_url: Url,
    /// File backing the persistent cart store.
    pub storage_path: PathBuf,
    /// Key the serialized cart is stored under.
    pub storage_key: String,
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let checkout_url = parse_checkout_url(
            "CARRITO_CHECKOUT_URL",
            &get_required_env("CARRITO_CHECKOUT_URL")?,
        )?;
        let storage_path =
            PathBuf::from(get_env_or_default("CARRITO_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let storage_key = get_env_or_default("CARRITO_STORAGE_KEY", DEFAULT_STORAGE_KEY);

        Ok(Self {
            checkout_url,
            storage_path,
            storage_key,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the checkout endpoint URL.
fn parse_checkout_url(var_name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))
}
