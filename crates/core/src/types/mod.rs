//! Core types for Carrito.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod price;

pub use price::{CurrencyCode, Price};
