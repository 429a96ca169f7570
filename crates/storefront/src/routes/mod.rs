//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//! GET  /section/{anchor}       - Highlight a section and scroll to it
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Open the cart drawer
//! POST /cart/close             - Close the cart drawer
//! POST /cart/add               - Add to cart (returns count badge)
//! POST /cart/update            - Change quantity by delta (returns drawer, triggers cart-updated)
//! POST /cart/remove            - Remove item (returns drawer, triggers cart-updated)
//! GET  /cart/count             - Cart count badge (fragment, refetched on cart-updated)
//!
//! # Forms
//! POST /order                  - Submit the order form
//! POST /order/draft            - Keep checkout form input (204)
//! POST /contact                - Submit the contact form
//! GET  /toast                  - Confirmation toast (fragment, fetched on toast-shown
//!                                and polled while visible)
//! ```
//!
//! Every POST also works without JavaScript: non-HTMX requests get a
//! `303 See Other` back to the page.

pub mod cart;
pub mod contact;
pub mod home;
pub mod nav;
pub mod order;

use axum::{
    Router,
    http::HeaderMap,
    routing::{get, post},
};

use crate::state::AppState;

/// Header HTMX sets on its requests.
const HX_REQUEST: &str = "hx-request";

/// Response header that fires client-side events.
pub const HX_TRIGGER: &str = "HX-Trigger";

/// Client event fired when the cart contents change. The count badge
/// refetches itself on it.
pub const CART_UPDATED: &str = "cart-updated";

/// Client event fired when the confirmation toast appears.
pub const TOAST_SHOWN: &str = "toast-shown";

/// Whether the request was issued by HTMX.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/close", post(cart::close))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/section/{anchor}", get(nav::select))
        .nest("/cart", cart_routes())
        .route("/order", post(order::submit))
        .route("/order/draft", post(order::save_draft))
        .route("/contact", post(contact::submit))
        .route("/toast", get(order::toast))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));

        headers.insert(HX_REQUEST, HeaderValue::from_static("false"));
        assert!(!is_htmx(&headers));
    }
}
