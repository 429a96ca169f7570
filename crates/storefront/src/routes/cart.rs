//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's in-memory page state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use paseka_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::CurrentVisitor;
use crate::routes::{CART_UPDATED, HX_TRIGGER, is_htmx};
use crate::views::CartView;

/// Largest quantity change accepted in one request.
const MAX_DELTA: u32 = 99;

/// Form data naming a product.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: ProductId,
}

/// Change quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub delta: i32,
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Open the cart drawer.
#[instrument(skip_all)]
pub async fn show(CurrentVisitor(visitor): CurrentVisitor, headers: HeaderMap) -> Response {
    let cart = {
        let mut state = visitor.lock().await;
        state.page.open_cart();
        CartView::from(&state.page)
    };

    if is_htmx(&headers) {
        CartDrawerTemplate { cart }.into_response()
    } else {
        Redirect::to("/").into_response()
    }
}

/// Close the cart drawer.
#[instrument(skip_all)]
pub async fn close(CurrentVisitor(visitor): CurrentVisitor, headers: HeaderMap) -> Response {
    let cart = {
        let mut state = visitor.lock().await;
        state.page.close_cart();
        CartView::from(&state.page)
    };

    if is_htmx(&headers) {
        CartDrawerTemplate { cart }.into_response()
    } else {
        Redirect::to("/").into_response()
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the updated count badge, which the add button targets directly.
#[instrument(skip(visitor, headers))]
pub async fn add(
    CurrentVisitor(visitor): CurrentVisitor,
    headers: HeaderMap,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let count = {
        let mut state = visitor.lock().await;
        let product = state.page.add_to_cart(form.product_id)?;
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("product", product.name.as_str())]),
        );
        state.page.cart().item_count()
    };

    tracing::debug!(visitor = %visitor.id(), product_id = %form.product_id, count, "Added to cart");

    if is_htmx(&headers) {
        Ok(CartCountTemplate { count }.into_response())
    } else {
        Ok(Redirect::to("/#catalog").into_response())
    }
}

/// Change a cart line's quantity by `delta` (HTMX).
///
/// Lines that drop to zero are removed.
#[instrument(skip(visitor, headers))]
pub async fn update(
    CurrentVisitor(visitor): CurrentVisitor,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    if form.delta.unsigned_abs() > MAX_DELTA {
        return Err(AppError::BadRequest(format!(
            "delta must be within ±{MAX_DELTA}"
        )));
    }

    let cart = {
        let mut state = visitor.lock().await;
        state.page.change_quantity(form.product_id, form.delta)?;
        CartView::from(&state.page)
    };

    Ok(drawer_response(&headers, cart))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(visitor, headers))]
pub async fn remove(
    CurrentVisitor(visitor): CurrentVisitor,
    headers: HeaderMap,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let cart = {
        let mut state = visitor.lock().await;
        state.page.remove_from_cart(form.product_id)?;
        CartView::from(&state.page)
    };

    Ok(drawer_response(&headers, cart))
}

/// Get cart count badge (HTMX).
#[instrument(skip_all)]
pub async fn count(CurrentVisitor(visitor): CurrentVisitor) -> impl IntoResponse {
    let count = visitor.lock().await.page.cart().item_count();
    CartCountTemplate { count }
}

fn drawer_response(headers: &HeaderMap, cart: CartView) -> Response {
    if is_htmx(headers) {
        (
            AppendHeaders([(HX_TRIGGER, CART_UPDATED)]),
            CartDrawerTemplate { cart },
        )
            .into_response()
    } else {
        Redirect::to("/").into_response()
    }
}
