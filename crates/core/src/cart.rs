//! The shopping cart.
//!
//! An insertion-ordered list of entries with at most one entry per product.
//! Quantities are always at least 1: an entry driven to zero is dropped.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Ordered collection of cart entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments an existing entry or appends a new one with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(entry) = self.entry_mut(product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
        } else {
            self.entries.push(CartEntry {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the entry for `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: ProductId) {
        self.entries.retain(|entry| entry.product.id != id);
    }

    /// Adjust the quantity of `id` by `delta` and drop it if it reaches zero.
    ///
    /// Absent ids are ignored.
    pub fn change_quantity(&mut self, id: ProductId, delta: i32) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        let adjusted = i64::from(entry.quantity) + i64::from(delta);
        entry.quantity = u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX);
        self.entries.retain(|entry| entry.quantity > 0);
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |sum, entry| sum.saturating_add(entry.quantity))
    }

    /// Sum of `price × quantity` over all entries.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Entries in the order they were first added.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Quantity of `id`, or 0 if it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.product.id == id)
            .map_or(0, |entry| entry.quantity)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.product.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: i32) -> Product {
        Catalog::seed().get(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_repeated_add_accumulates_one_entry() {
        let linden = product(1);
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&linden);
        }
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.quantity_of(linden.id), 5);
    }

    #[test]
    fn test_distinct_products_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(4));
        cart.add(&product(2));
        cart.add(&product(4));

        let ids: Vec<i32> = cart.entries().iter().map(|e| e.product.id.as_i32()).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn test_decrement_to_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.add(&product(3));
        cart.add(&product(5));
        cart.change_quantity(ProductId::new(3), -1);

        assert_eq!(cart.quantity_of(ProductId::new(3)), 0);
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].product.id, ProductId::new(5));
    }

    #[test]
    fn test_large_negative_delta_removes_entry() {
        let mut cart = Cart::new();
        cart.add(&product(3));
        cart.change_quantity(ProductId::new(3), -10);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_leaves_other_entries() {
        let mut cart = Cart::new();
        cart.add(&product(1));
        cart.add(&product(2));
        cart.change_quantity(ProductId::new(2), 3);

        assert_eq!(cart.quantity_of(ProductId::new(1)), 1);
        assert_eq!(cart.quantity_of(ProductId::new(2)), 4);
    }

    #[test]
    fn test_change_quantity_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1));
        let before = cart.clone();
        cart.change_quantity(ProductId::new(42), 1);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(6));
        let before = cart.clone();
        cart.remove(ProductId::new(7));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_present() {
        let mut cart = Cart::new();
        cart.add(&product(6));
        cart.add(&product(6));
        cart.remove(ProductId::new(6));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1)); // 680
        cart.add(&product(1));
        cart.add(&product(7)); // 1200

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::new(680 * 2 + 1200));
        assert_eq!(cart.entries()[0].line_total(), Price::new(1360));
    }

    #[test]
    fn test_add_twice_decrement_once() {
        let mut cart = Cart::new();
        let linden = product(1);
        cart.add(&linden);
        cart.add(&linden);
        cart.change_quantity(linden.id, -1);

        assert_eq!(cart.quantity_of(linden.id), 1);
        assert_eq!(cart.total(), Price::new(680));
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }
}
