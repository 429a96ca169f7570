//! Order and contact form submission.
//!
//! Submitting an order walks a three-state machine:
//!
//! ```text
//! Idle ──submit──> Submitting ──confirm──> Confirmed ──(toast timeout)──> Idle
//!                      │
//!                      └──abort──> Idle
//! ```
//!
//! The timeout itself is driven by the caller: [`OrderFlow::confirm`] hands out
//! a [`DismissTicket`] and [`OrderFlow::dismiss`] only honours the most recent
//! one, so a timer left over from an earlier order never hides a newer toast.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartEntry};
use crate::types::Price;

/// How long the confirmation toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Order and contact submission errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("name is required")]
    MissingName,
    #[error("phone is required")]
    MissingPhone,
    #[error("phone or email is required")]
    MissingContact,
    #[error("cart is empty")]
    EmptyCart,
    #[error("an order is already being submitted")]
    InProgress,
}

/// Checkout form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub comment: String,
}

impl OrderForm {
    /// Check that name and phone are present.
    ///
    /// # Errors
    ///
    /// Returns `MissingName` or `MissingPhone` for blank required fields.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.name.trim().is_empty() {
            return Err(OrderError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(OrderError::MissingPhone);
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            comment: self.comment.trim().to_string(),
        }
    }
}

/// A message from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    /// Phone number or email address.
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Check that name and contact are present.
    ///
    /// # Errors
    ///
    /// Returns `MissingName` or `MissingContact` for blank required fields.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.name.trim().is_empty() {
            return Err(OrderError::MissingName);
        }
        if self.contact.trim().is_empty() {
            return Err(OrderError::MissingContact);
        }
        Ok(())
    }
}

/// Snapshot of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer: OrderForm,
    pub entries: Vec<CartEntry>,
    pub item_count: u32,
    pub total: Price,
}

impl Order {
    /// Snapshot `cart` together with the (trimmed) form.
    #[must_use]
    pub fn from_cart(form: &OrderForm, cart: &Cart) -> Self {
        Self {
            customer: form.trimmed(),
            entries: cart.entries().to_vec(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

/// Where the order flow currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Idle,
    Submitting,
    Confirmed,
}

/// Proof of a confirmation, redeemed to hide its toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket(u64);

/// The order submission state machine.
#[derive(Debug, Clone, Default)]
pub struct OrderFlow {
    status: OrderStatus,
    generation: u64,
}

impl OrderFlow {
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Whether the confirmation toast should be shown.
    #[must_use]
    pub const fn is_toast_visible(&self) -> bool {
        matches!(self.status, OrderStatus::Confirmed)
    }

    /// Enter `Submitting`. A visible toast from an earlier order is replaced.
    ///
    /// # Errors
    ///
    /// Returns `InProgress` if a submission is already under way.
    pub fn begin(&mut self) -> Result<(), OrderError> {
        if self.status == OrderStatus::Submitting {
            return Err(OrderError::InProgress);
        }
        self.status = OrderStatus::Submitting;
        Ok(())
    }

    /// Enter `Confirmed` and return the ticket that will dismiss the toast.
    ///
    /// Also used for contact messages, which skip `Submitting`.
    pub const fn confirm(&mut self) -> DismissTicket {
        self.generation = self.generation.wrapping_add(1);
        self.status = OrderStatus::Confirmed;
        DismissTicket(self.generation)
    }

    /// Return to `Idle` after a failed submission.
    pub fn abort(&mut self) {
        if self.status == OrderStatus::Submitting {
            self.status = OrderStatus::Idle;
        }
    }

    /// Hide the toast if `ticket` belongs to the latest confirmation.
    ///
    /// Returns `true` if the flow went back to `Idle`.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if self.status == OrderStatus::Confirmed && ticket.0 == self.generation {
            self.status = OrderStatus::Idle;
            true
        } else {
            false
        }
    }
}
