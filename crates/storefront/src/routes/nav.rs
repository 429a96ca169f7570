//! Section navigation handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Path,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use paseka_core::Section;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::CurrentVisitor;
use crate::routes::{HX_TRIGGER, is_htmx};
use crate::views::{NavItemView, nav_items};

/// Client event that scrolls the viewport to a section.
pub const SCROLL_EVENT: &str = "scroll-to-section";

/// Navigation bar fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/nav.html")]
pub struct NavTemplate {
    pub nav: Vec<NavItemView>,
}

/// Highlight a section and scroll to it.
///
/// HTMX requests get the updated nav bar plus a `scroll-to-section` event;
/// plain requests are redirected to the section's anchor.
#[instrument(skip(visitor, headers))]
pub async fn select(
    CurrentVisitor(visitor): CurrentVisitor,
    Path(anchor): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let section: Section = anchor
        .parse()
        .map_err(|e: paseka_core::UnknownSection| AppError::NotFound(e.to_string()))?;

    let target = visitor.lock().await.page.select_section(section);

    if is_htmx(&headers) {
        let mut payload = serde_json::Map::new();
        payload.insert(SCROLL_EVENT.to_string(), target.into());
        let trigger = serde_json::Value::Object(payload).to_string();
        Ok((
            AppendHeaders([(HX_TRIGGER, trigger)]),
            NavTemplate {
                nav: nav_items(section),
            },
        )
            .into_response())
    } else {
        Ok(Redirect::to(&format!("/#{target}")).into_response())
    }
}
