//! Integration test harness for the Carrito cart widget.
//!
//! Each test spins up an in-process checkout endpoint on an ephemeral port
//! and drives the widget against it over a throwaway file store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p carrito-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use carrito_widget::WidgetConfig;
use serde_json::Value;
use tokio::net::TcpListener;

/// A running in-process stand-in for the order-finalization endpoint.
///
/// Answers every `POST /finalizar_compra` with a fixed status and body,
/// recording the hit count and the last request body.
pub struct CheckoutEndpoint {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl CheckoutEndpoint {
    /// Widget configuration pointing at this endpoint, with a throwaway
    /// storage file.
    #[must_use]
    pub fn config(&self) -> WidgetConfig {
        WidgetConfig {
            checkout_url: url::Url::parse(&format!(
                "http://{}/finalizar_compra",
                self.addr
            ))
            .expect("endpoint URL"),
            storage_path: temp_storage_path(),
            storage_key: "cart".to_string(),
        }
    }

    /// How many checkout requests the endpoint has served.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Body of the most recent checkout request, if any.
    #[must_use]
    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().expect("request log poisoned").clone()
    }
}

/// Spawn a checkout endpoint answering with `status` and `response`.
pub async fn spawn_checkout_endpoint(status: StatusCode, response: Value) -> CheckoutEndpoint {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_body = Arc::new(Mutex::new(None));

    let app = {
        let hits = Arc::clone(&hits);
        let last_body = Arc::clone(&last_body);
        Router::new().route(
            "/finalizar_compra",
            post(move |Json(body): Json<Value>| {
                let hits = Arc::clone(&hits);
                let last_body = Arc::clone(&last_body);
                let response = response.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    *last_body.lock().expect("request log poisoned") = Some(body);
                    (status, Json(response))
                }
            }),
        )
    };

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock endpoint");
    });

    CheckoutEndpoint {
        addr,
        hits,
        last_body,
    }
}

/// Unique storage file path under the system temp directory.
#[must_use]
pub fn temp_storage_path() -> PathBuf {
    std::env::temp_dir().join(format!("carrito-it-{}.json", uuid::Uuid::new_v4()))
}
