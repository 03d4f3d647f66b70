//! Carrito Core - Shared domain types.
//!
//! This crate provides the types shared across the Carrito components:
//! - `widget` - The cart widget engine (storage, rendering, checkout)
//! - `cli` - Command-line driver for the widget
//!
//! # Architecture
//!
//! The core crate contains only types and cart mutation rules - no I/O, no
//! persistence, no HTTP clients. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Price and currency types
//! - [`cart`] - Line items and the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, LineItem, StockExhausted};
pub use types::*;
