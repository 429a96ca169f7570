//! Landing page route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::CSS_HASH;
use crate::content::PageContent;
use crate::error::Result;
use crate::middleware::{CspNonce, CurrentVisitor};
use crate::state::AppState;
use crate::views::{CartView, NavItemView, ProductView, nav_items};

/// Landing page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub content: &'a PageContent,
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub count: u32,
    pub nav: Vec<NavItemView>,
    pub toast: bool,
    pub nonce: String,
    pub css_hash: &'static str,
}

/// Render the whole landing page for the current visitor.
///
/// The cart drawer and the toast are rendered in whatever state the visitor
/// left them, so the page works without JavaScript.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    CurrentVisitor(visitor): CurrentVisitor,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let guard = visitor.lock().await;
    let page = &guard.page;

    let template = HomeTemplate {
        content: state.content(),
        products: ProductView::list(page),
        cart: CartView::from(page),
        count: page.cart().item_count(),
        nav: nav_items(page.active_section()),
        toast: page.is_toast_visible(),
        nonce,
        css_hash: CSS_HASH,
    };
    drop(guard);

    Ok(Html(template.render()?))
}
