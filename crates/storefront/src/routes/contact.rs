//! Contact form route handlers.
//!
//! Messages are only logged; the visitor sees the same confirmation toast
//! as for an order.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use paseka_core::ContactMessage;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::CurrentVisitor;
use crate::routes::{HX_TRIGGER, TOAST_SHOWN, is_htmx};
use crate::state::AppState;

/// Blank contact form fragment, swapped in after a successful send.
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_form.html")]
pub struct ContactFormTemplate;

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    CurrentVisitor(visitor): CurrentVisitor,
    headers: HeaderMap,
    Form(message): Form<ContactMessage>,
) -> Result<Response> {
    {
        let mut guard = visitor.lock().await;
        let ticket = guard.page.submit_contact(&message)?;
        visitor.schedule_toast_dismiss(&mut guard, ticket, state.config().toast_duration);
    }

    add_breadcrumb("contact", "Contact message sent", None);
    tracing::info!(
        name = %message.name.trim(),
        contact = %message.contact.trim(),
        length = message.message.chars().count(),
        "Contact message received"
    );

    if is_htmx(&headers) {
        Ok((
            AppendHeaders([(HX_TRIGGER, TOAST_SHOWN)]),
            ContactFormTemplate,
        )
            .into_response())
    } else {
        Ok(Redirect::to("/#contacts").into_response())
    }
}
