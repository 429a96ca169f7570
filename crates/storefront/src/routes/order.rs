//! Order submission and confirmation toast handlers.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use paseka_core::{Order, OrderForm};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::CurrentVisitor;
use crate::routes::cart::CartDrawerTemplate;
use crate::routes::{CART_UPDATED, HX_TRIGGER, TOAST_SHOWN, is_htmx};
use crate::services::{OrderReceipt, OrderSinkError};
use crate::state::AppState;
use crate::views::CartView;
use crate::visitors::Visitor;

/// Confirmation toast fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub toast: bool,
}

/// Submit the checkout form.
///
/// The cart snapshot is handed to the order sink without holding the
/// visitor's lock; a second submission in the meantime gets 409. The sink
/// call runs in its own task so the order is settled even if the client
/// disconnects. HTMX requests get the emptied, closed drawer and fire
/// `cart-updated` and `toast-shown`.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    CurrentVisitor(visitor): CurrentVisitor,
    headers: HeaderMap,
    Form(form): Form<OrderForm>,
) -> Result<Response> {
    let order = visitor.lock().await.page.submit_order(form)?;
    add_breadcrumb("order", "Order submitted", None);

    let (items, total) = (order.item_count, order.total);
    let task = tokio::spawn(settle_order(state, Arc::clone(&visitor), order));
    let (receipt, cart) = match task.await {
        Ok(settled) => settled?,
        Err(e) => {
            visitor.lock().await.page.fail_order();
            return Err(AppError::Internal(format!("order task failed: {e}")));
        }
    };

    tracing::info!(
        reference = %receipt.reference,
        items,
        total = total.amount(),
        "Order confirmed"
    );

    if is_htmx(&headers) {
        let events = format!("{CART_UPDATED}, {TOAST_SHOWN}");
        Ok((
            AppendHeaders([(HX_TRIGGER, events)]),
            CartDrawerTemplate { cart },
        )
            .into_response())
    } else {
        Ok(Redirect::to("/").into_response())
    }
}

/// Hand `order` to the sink and move the flow out of `Submitting`.
async fn settle_order(
    state: AppState,
    visitor: Arc<Visitor>,
    order: Order,
) -> std::result::Result<(OrderReceipt, CartView), OrderSinkError> {
    let submitted = state.orders().submit(&order).await;

    let mut guard = visitor.lock().await;
    match submitted {
        Ok(receipt) => {
            let ticket = guard.page.complete_order();
            visitor.schedule_toast_dismiss(&mut guard, ticket, state.config().toast_duration);
            Ok((receipt, CartView::from(&guard.page)))
        }
        Err(e) => {
            guard.page.fail_order();
            Err(e)
        }
    }
}

/// Keep the checkout form input while the visitor types.
///
/// Inputs post here on `change`, so closing and reopening the drawer does
/// not lose what was entered.
#[instrument(skip_all)]
pub async fn save_draft(
    CurrentVisitor(visitor): CurrentVisitor,
    headers: HeaderMap,
    Form(form): Form<OrderForm>,
) -> Response {
    visitor.lock().await.page.update_form(form);

    if is_htmx(&headers) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Redirect::to("/").into_response()
    }
}

/// Current toast state.
///
/// The hidden toast fetches this on `toast-shown`; the visible one polls it
/// until the server hides it.
pub async fn toast(CurrentVisitor(visitor): CurrentVisitor) -> impl IntoResponse {
    let toast = visitor.lock().await.page.is_toast_visible();
    ToastTemplate { toast }
}
