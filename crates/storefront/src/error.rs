//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use paseka_core::{OrderError, PageError};
use thiserror::Error;

use crate::services::OrderSinkError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A page operation was rejected.
    #[error("Page error: {0}")]
    Page(#[from] PageError),

    /// The order sink did not accept the order.
    #[error("Order error: {0}")]
    Order(#[from] OrderSinkError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Session(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        Self::Internal(format!("template rendering failed: {err}"))
    }
}

/// Message shown to the visitor for a rejected form.
const fn order_error_message(err: OrderError) -> &'static str {
    match err {
        OrderError::MissingName => "Укажите ваше имя",
        OrderError::MissingPhone => "Укажите телефон",
        OrderError::MissingContact => "Укажите телефон или email",
        OrderError::EmptyCart => "Корзина пуста",
        OrderError::InProgress => "Заказ уже оформляется",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Order(_) | Self::Session(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Page(PageError::UnknownProduct(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Page(PageError::Order(OrderError::InProgress)) => StatusCode::CONFLICT,
            Self::Page(PageError::Order(_)) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Order(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Page(PageError::UnknownProduct(_)) => "Товар не найден".to_string(),
            Self::Page(PageError::Order(err)) => order_error_message(*err).to_string(),
            Self::Order(_) => {
                "Не удалось оформить заказ, попробуйте ещё раз".to_string()
            }
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for visitor actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use paseka_core::ProductId;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("section shop".to_string());
        assert_eq!(err.to_string(), "Not found: section shop");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(PageError::UnknownProduct(ProductId::new(99)).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(PageError::Order(OrderError::MissingPhone).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(PageError::Order(OrderError::InProgress).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(OrderSinkError::Unavailable("down".to_string()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
