//! Paseka Core - catalog, cart and order logic.
//!
//! This crate provides the domain model used by the storefront and the CLI:
//! - `storefront` - Public landing page with cart and order form
//! - `cli` - Catalog listing and order quotes
//!
//! # Architecture
//!
//! The core crate contains only types and state machines - no I/O, no HTTP,
//! no timers. Callers own the clock and the async runtime.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - Cart entries, quantities and totals
//! - [`order`] - Checkout form and the order submission state machine
//! - [`nav`] - Page sections and the active-section tracker
//! - [`page`] - Per-visitor controller tying the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod nav;
pub mod order;
pub mod page;
pub mod types;

pub use cart::{Cart, CartEntry};
pub use catalog::{Catalog, CatalogError, Product};
pub use nav::{Navigator, Section, UnknownSection};
pub use order::{
    ContactMessage, DismissTicket, Order, OrderError, OrderFlow, OrderForm, OrderStatus,
    TOAST_DURATION,
};
pub use page::{PageController, PageError};
pub use types::*;
