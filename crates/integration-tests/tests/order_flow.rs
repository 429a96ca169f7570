//! Order and contact submission with the confirmation toast.

#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use paseka_core::Order;
use paseka_integration_tests::{TEST_TOAST, TestApp};
use paseka_storefront::services::{OrderReceipt, OrderSink, OrderSinkError};
use reqwest::StatusCode;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

const ORDER_FORM: &[(&str, &str)] = &[
    ("name", "Анна"),
    ("phone", "+7 900 111-22-33"),
    ("address", "Тула, ул. Пчелиная, 3"),
    ("comment", "Позвоните заранее"),
];

/// Rejects every order.
struct UnavailableSink;

#[async_trait]
impl OrderSink for UnavailableSink {
    async fn submit(&self, _order: &Order) -> Result<OrderReceipt, OrderSinkError> {
        Err(OrderSinkError::Unavailable("maintenance".to_string()))
    }
}

/// Holds each order until released.
#[derive(Default)]
struct GatedSink {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl OrderSink for GatedSink {
    async fn submit(&self, _order: &Order) -> Result<OrderReceipt, OrderSinkError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(OrderReceipt::generate())
    }
}

/// Start an HTMX order on a background task, as a browser tab would.
fn start_order(app: &TestApp) -> JoinHandle<StatusCode> {
    let client = app.client.clone();
    let url = app.url("/order");
    tokio::spawn(async move {
        client
            .post(url)
            .header("HX-Request", "true")
            .form(ORDER_FORM)
            .send()
            .await
            .expect("order request")
            .status()
    })
}

async fn wait_out_toast() {
    tokio::time::sleep(TEST_TOAST + Duration::from_millis(400)).await;
}

#[tokio::test]
async fn test_order_clears_cart_and_shows_toast() {
    let app = TestApp::spawn().await;
    app.add_to_cart(1, 2).await;
    app.add_to_cart(2, 1).await;
    app.hx_get("/cart").await;

    let resp = app.hx_post("/order", ORDER_FORM).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["hx-trigger"], "cart-updated, toast-shown");
    assert!(resp.text().await.expect("body").contains("cart-drawer--closed"));

    assert_eq!(app.cart_count().await, 0);
    assert!(app.toast_visible().await);

    // Form is blank again
    app.hx_get("/cart").await;
    let page = app.get("/").await.text().await.expect("body");
    assert!(!page.contains("Анна"));

    wait_out_toast().await;
    assert!(!app.toast_visible().await);
}

#[tokio::test]
async fn test_missing_phone_keeps_cart_and_input() {
    let app = TestApp::spawn().await;
    app.add_to_cart(3, 1).await;

    let resp = app
        .hx_post("/order", &[("name", "Анна"), ("phone", "  ")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.expect("body"), "Укажите телефон");

    assert_eq!(app.cart_count().await, 1);
    assert!(!app.toast_visible().await);

    app.hx_get("/cart").await;
    let page = app.get("/").await.text().await.expect("body");
    assert!(page.contains(r#"value="Анна""#));
}

#[tokio::test]
async fn test_draft_survives_closing_drawer() {
    let app = TestApp::spawn().await;
    app.add_to_cart(4, 1).await;
    app.hx_get("/cart").await;

    let resp = app
        .hx_post("/order/draft", &[("name", "Борис"), ("address", "Калуга")])
        .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    app.hx_post("/cart/close", &[]).await;
    let drawer = app.hx_get("/cart").await.text().await.expect("body");
    assert!(drawer.contains(r#"value="Борис""#));
    assert!(drawer.contains(r#"value="Калуга""#));
}

#[tokio::test]
async fn test_empty_cart_order_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app.hx_post("/order", ORDER_FORM).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.expect("body"), "Корзина пуста");
    assert!(!app.toast_visible().await);
}

#[tokio::test]
async fn test_failed_order_keeps_cart() {
    let app = TestApp::spawn_with_sink(Arc::new(UnavailableSink)).await;
    app.add_to_cart(6, 2).await;

    let resp = app.hx_post("/order", ORDER_FORM).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(app.cart_count().await, 2);
    assert!(!app.toast_visible().await);

    // Back to idle: a retry reaches the sink again instead of 409
    let resp = app.hx_post("/order", ORDER_FORM).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_second_submission_while_pending_conflicts() {
    let sink = Arc::new(GatedSink::default());
    let app = TestApp::spawn_with_sink(Arc::clone(&sink) as Arc<dyn OrderSink>).await;
    app.add_to_cart(8, 1).await;

    let first = start_order(&app);
    sink.entered.notified().await;

    let second = app.hx_post("/order", ORDER_FORM).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    sink.release.notify_one();
    assert_eq!(first.await.expect("join"), StatusCode::OK);
    assert_eq!(app.cart_count().await, 0);
}

#[tokio::test]
async fn test_cart_is_frozen_while_order_pending() {
    let sink = Arc::new(GatedSink::default());
    let app = TestApp::spawn_with_sink(Arc::clone(&sink) as Arc<dyn OrderSink>).await;
    app.add_to_cart(1, 1).await;

    let order = start_order(&app);
    sink.entered.notified().await;

    let add = app.hx_post("/cart/add", &[("product_id", "7")]).await;
    assert_eq!(add.status(), StatusCode::CONFLICT);
    let update = app
        .hx_post("/cart/update", &[("product_id", "1"), ("delta", "1")])
        .await;
    assert_eq!(update.status(), StatusCode::CONFLICT);
    let remove = app.hx_post("/cart/remove", &[("product_id", "1")]).await;
    assert_eq!(remove.status(), StatusCode::CONFLICT);
    assert_eq!(app.cart_count().await, 1);

    sink.release.notify_one();
    assert_eq!(order.await.expect("join"), StatusCode::OK);
    assert_eq!(app.cart_count().await, 0);

    // Editable again once the order is settled
    app.add_to_cart(7, 1).await;
    assert_eq!(app.cart_count().await, 1);
}

#[tokio::test]
async fn test_order_settles_after_client_disconnects() {
    let sink = Arc::new(GatedSink::default());
    let app = TestApp::spawn_with_sink(Arc::clone(&sink) as Arc<dyn OrderSink>).await;
    app.add_to_cart(3, 2).await;

    let abandoned = start_order(&app);
    sink.entered.notified().await;
    abandoned.abort();
    assert!(abandoned.await.is_err());

    sink.release.notify_one();
    let mut settled = false;
    for _ in 0..100 {
        if app.cart_count().await == 0 {
            settled = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(settled, "order never left Submitting");

    let contact = app
        .hx_post("/contact", &[("name", "Анна"), ("contact", "anna@example.ru")])
        .await;
    assert_eq!(contact.status(), StatusCode::OK);

    app.add_to_cart(4, 1).await;
    sink.release.notify_one();
    let resp = app.hx_post("/order", ORDER_FORM).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(app.cart_count().await, 0);
}

#[tokio::test]
async fn test_plain_order_post_redirects_home() {
    let app = TestApp::spawn().await;
    app.add_to_cart(5, 1).await;

    let resp = app.post("/order", ORDER_FORM).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    let page = app.get("/").await.text().await.expect("body");
    assert!(page.contains("Заказ принят!"));
}

#[tokio::test]
async fn test_contact_form_shows_toast() {
    let app = TestApp::spawn().await;

    let resp = app
        .hx_post(
            "/contact",
            &[
                ("name", "Олег"),
                ("contact", "oleg@example.ru"),
                ("message", "Есть ли мёд в сотах?"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["hx-trigger"], "toast-shown");
    assert!(resp.text().await.expect("body").contains(r#"id="contact-form""#));
    assert!(app.toast_visible().await);

    wait_out_toast().await;
    assert!(!app.toast_visible().await);
}

#[tokio::test]
async fn test_contact_form_requires_contact() {
    let app = TestApp::spawn().await;

    let resp = app
        .hx_post("/contact", &[("name", "Олег"), ("contact", "")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.expect("body"), "Укажите телефон или email");
    assert!(!app.toast_visible().await);
}
