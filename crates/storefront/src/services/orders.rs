//! Order intake.
//!
//! The landing page has no order backend: [`LogOrderSink`] records the order
//! in the logs and always accepts it. A real backend plugs in by implementing
//! [`OrderSink`]; a failed submission leaves the visitor's cart untouched.

use async_trait::async_trait;
use paseka_core::Order;
use thiserror::Error;
use uuid::Uuid;

/// Errors from an order sink.
#[derive(Debug, Error)]
pub enum OrderSinkError {
    #[error("order rejected: {0}")]
    Rejected(String),
    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// Acknowledgement of an accepted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Short reference to quote when the shop calls back.
    pub reference: String,
}

impl OrderReceipt {
    /// Receipt with a fresh random reference.
    #[must_use]
    pub fn generate() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            reference: id.chars().take(8).collect::<String>().to_uppercase(),
        }
    }
}

/// Destination for submitted orders.
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Hand over a submitted order.
    ///
    /// # Errors
    ///
    /// Returns `OrderSinkError` if the order could not be accepted.
    async fn submit(&self, order: &Order) -> Result<OrderReceipt, OrderSinkError>;
}

/// Accepts every order and writes it to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOrderSink;

#[async_trait]
impl OrderSink for LogOrderSink {
    async fn submit(&self, order: &Order) -> Result<OrderReceipt, OrderSinkError> {
        let receipt = OrderReceipt::generate();
        let lines: Vec<String> = order
            .entries
            .iter()
            .map(|entry| format!("{} x{}", entry.product.name, entry.quantity))
            .collect();

        tracing::info!(
            reference = %receipt.reference,
            customer = %order.customer.name,
            phone = %order.customer.phone,
            address = %order.customer.address,
            comment = %order.customer.comment,
            items = order.item_count,
            total = %order.total,
            lines = ?lines,
            "Order received"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use paseka_core::{Catalog, OrderForm, PageController, ProductId};

    use super::*;

    #[test]
    fn test_receipt_reference_format() {
        let receipt = OrderReceipt::generate();
        assert_eq!(receipt.reference.len(), 8);
        assert!(receipt.reference.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_log_sink_accepts() {
        let mut page = PageController::new(Arc::new(Catalog::seed()));
        page.add_to_cart(ProductId::new(5)).unwrap();
        let order = page
            .submit_order(OrderForm {
                name: "Пётр".to_string(),
                phone: "89000000000".to_string(),
                ..OrderForm::default()
            })
            .unwrap();

        assert!(LogOrderSink.submit(&order).await.is_ok());
    }
}
