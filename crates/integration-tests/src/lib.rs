//! End-to-end tests for the Paseka storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paseka-integration-tests
//! ```
//!
//! Each test starts the real router on an ephemeral port and talks to it with
//! a cookie-keeping `reqwest` client, so every `TestApp` is one visitor.
//!
//! # Test Categories
//!
//! - `landing_page` - Page rendering, navigation, headers
//! - `cart` - Cart drawer and count badge
//! - `order_flow` - Order and contact submission, confirmation toast

#![allow(clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use paseka_storefront::config::StorefrontConfig;
use paseka_storefront::services::OrderSink;
use paseka_storefront::state::AppState;
use reqwest::{Client, Response, redirect::Policy};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Toast duration used in tests, short enough to wait out.
pub const TEST_TOAST: Duration = Duration::from_millis(300);

/// Configuration for a test server.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        toast_duration: TEST_TOAST,
        ..StorefrontConfig::default()
    }
}

/// A storefront running on a random local port.
pub struct TestApp {
    pub addr: SocketAddr,
    /// Client with its own cookie jar. Redirects are not followed.
    pub client: Client,
    server: JoinHandle<()>,
}

impl TestApp {
    /// Start a storefront with the logging order sink.
    pub async fn spawn() -> Self {
        Self::spawn_with(AppState::new(test_config())).await
    }

    /// Start a storefront that hands orders to `sink`.
    pub async fn spawn_with_sink(sink: Arc<dyn OrderSink>) -> Self {
        Self::spawn_with(AppState::with_order_sink(test_config(), sink)).await
    }

    /// Start a storefront with the given state.
    pub async fn spawn_with(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = paseka_storefront::app(state);
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            addr,
            client: new_client(),
            server,
        }
    }

    /// A second visitor against the same server.
    #[must_use]
    pub fn another_visitor(&self) -> Client {
        new_client()
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Plain browser GET.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET failed")
    }

    /// GET as issued by HTMX.
    pub async fn hx_get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("HX GET failed")
    }

    /// Form POST without JavaScript.
    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST failed")
    }

    /// Form POST as issued by HTMX.
    pub async fn hx_post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("HX POST failed")
    }

    /// Add `quantity` units of a product through the HTMX endpoint.
    pub async fn add_to_cart(&self, product_id: i32, quantity: u32) {
        let id = product_id.to_string();
        for _ in 0..quantity {
            let resp = self.hx_post("/cart/add", &[("product_id", id.as_str())]).await;
            assert!(resp.status().is_success(), "add failed: {}", resp.status());
        }
    }

    /// Current value of the cart count badge.
    pub async fn cart_count(&self) -> u32 {
        let body = self.hx_get("/cart/count").await.text().await.expect("body");
        badge_value(&body)
    }

    /// Whether the confirmation toast is currently shown.
    pub async fn toast_visible(&self) -> bool {
        let body = self.hx_get("/toast").await.text().await.expect("body");
        body.contains("Заказ принят!")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Number shown in a rendered count badge; an empty badge is zero.
#[must_use]
pub fn badge_value(body: &str) -> u32 {
    body.trim_end()
        .strip_suffix("</span>")
        .and_then(|rest| rest.rsplit('>').next())
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0)
}
