//! Display data for templates.
//!
//! Templates never see core types directly; prices are preformatted here.

use paseka_core::{CartEntry, PageController, Product, Section};

/// Product card display data.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub unit: String,
    pub glyph: String,
    pub badge: Option<String>,
    /// Units of this product already in the visitor's cart.
    pub in_cart: u32,
}

impl ProductView {
    /// Catalog cards for a visitor, in catalog order.
    #[must_use]
    pub fn list(page: &PageController) -> Vec<Self> {
        page.catalog()
            .products()
            .iter()
            .map(|product| Self::new(product, page.cart().quantity_of(product.id)))
            .collect()
    }

    fn new(product: &Product, in_cart: u32) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            unit: product.unit.clone(),
            glyph: product.glyph.clone(),
            badge: product.badge.clone(),
            in_cart,
        }
    }
}

/// Cart line display data.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub glyph: String,
    pub unit: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            product_id: entry.product.id.as_i32(),
            name: entry.product.name.clone(),
            glyph: entry.product.glyph.clone(),
            unit: entry.product.unit.clone(),
            unit_price: entry.product.price.to_string(),
            quantity: entry.quantity,
            line_total: entry.line_total().to_string(),
        }
    }
}

/// Cart drawer display data.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
    /// Whether the drawer is shown.
    pub open: bool,
    /// Form input kept from a rejected submission.
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
}

impl From<&PageController> for CartView {
    fn from(page: &PageController) -> Self {
        let cart = page.cart();
        let form = page.form();
        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            total: cart.total().to_string(),
            item_count: cart.item_count(),
            open: page.is_cart_open(),
            name: form.name.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            comment: form.comment.clone(),
        }
    }
}

/// Navigation link display data.
#[derive(Clone, Copy)]
pub struct NavItemView {
    pub anchor: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation links with `active` highlighted.
#[must_use]
pub fn nav_items(active: Section) -> Vec<NavItemView> {
    Section::ALL
        .into_iter()
        .map(|section| NavItemView {
            anchor: section.anchor(),
            label: section.label(),
            active: section == active,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use paseka_core::{Catalog, ProductId};

    use super::*;

    #[test]
    fn test_cart_view_formats_prices() {
        let mut page = PageController::new(Arc::new(Catalog::seed()));
        page.add_to_cart(ProductId::new(7)).unwrap();
        page.add_to_cart(ProductId::new(7)).unwrap();

        let view = CartView::from(&page);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, "2400 ₽");
        assert_eq!(view.items[0].unit_price, "1200 ₽");
        assert_eq!(view.items[0].line_total, "2400 ₽");
        assert!(!view.open);
    }

    #[test]
    fn test_product_list_marks_cart_quantity() {
        let mut page = PageController::new(Arc::new(Catalog::seed()));
        page.add_to_cart(ProductId::new(3)).unwrap();

        let products = ProductView::list(&page);
        assert_eq!(products.len(), 8);
        assert_eq!(products[2].in_cart, 1);
        assert_eq!(products[0].in_cart, 0);
        assert_eq!(products[0].badge.as_deref(), Some("Хит"));
    }

    #[test]
    fn test_nav_items_single_active() {
        let items = nav_items(Section::About);
        assert_eq!(items.len(), 5);
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items[2].active);
    }
}
