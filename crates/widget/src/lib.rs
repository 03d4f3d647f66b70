//! Carrito widget library.
//!
//! This crate provides the cart widget as a library, allowing it to be
//! tested and embedded in different hosts (the CLI driver, integration
//! tests, a future server-side renderer).
//!
//! # Architecture
//!
//! - [`widget::CartWidget`] - the controller owning the cart state
//! - [`storage`] - injected persistence (file-backed or in-memory)
//! - [`page`] - host-page abstraction the widget renders into
//! - [`views`] - display structs and the Askama item-list template
//! - [`checkout`] - HTTP client for the order-finalization endpoint
//! - [`config`] - environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod page;
pub mod storage;
pub mod views;
pub mod widget;

pub use checkout::{CheckoutClient, CheckoutResponse, CheckoutStatus};
pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
pub use page::{Element, Page, element_ids};
pub use storage::{CartStorage, FileStore, KeyValueStore, MemoryStore};
pub use widget::{AddOutcome, CartWidget, CheckoutOutcome};
