//! Visitor extractor.
//!
//! Resolves the session's visitor id to its page state, creating both on the
//! first request.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use paseka_core::VisitorId;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::session::keys;
use crate::state::AppState;
use crate::visitors::Visitor;

/// The current visitor's page state.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentVisitor(visitor): CurrentVisitor) -> impl IntoResponse {
///     let state = visitor.lock().await;
///     format!("{} items", state.page.cart().item_count())
/// }
/// ```
pub struct CurrentVisitor(pub Arc<Visitor>);

impl FromRequestParts<AppState> for CurrentVisitor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let id = match session.get::<VisitorId>(keys::VISITOR_ID).await? {
            Some(id) => id,
            None => {
                let id = VisitorId::generate();
                session.insert(keys::VISITOR_ID, id).await?;
                tracing::debug!(visitor = %id, "New visitor");
                id
            }
        };

        tracing::Span::current().record("visitor", tracing::field::display(id));

        Ok(Self(state.visitors().get_or_create(id).await))
    }
}
