//! Business logic services for storefront.
//!
//! # Services
//!
//! - `orders` - Where submitted orders go once the visitor confirms them

pub mod orders;

pub use orders::{LogOrderSink, OrderReceipt, OrderSink, OrderSinkError};
