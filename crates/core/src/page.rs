//! Per-visitor page state.
//!
//! [`PageController`] owns everything a visitor can change on the landing
//! page: the cart, the checkout form, the order flow, the highlighted section
//! and whether the cart drawer is open. Callers mutate it only through the
//! methods below; one controller lives exactly as long as the visitor's view.

use std::sync::Arc;

use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::nav::{Navigator, Section};
use crate::order::{
    ContactMessage, DismissTicket, Order, OrderError, OrderFlow, OrderForm, OrderStatus,
};
use crate::types::ProductId;

/// Errors from page operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Owner of one visitor's page state.
#[derive(Debug, Clone)]
pub struct PageController {
    catalog: Arc<Catalog>,
    cart: Cart,
    form: OrderForm,
    flow: OrderFlow,
    nav: Navigator,
    cart_open: bool,
}

impl PageController {
    /// Fresh state: empty cart, blank form, home section, drawer closed.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            form: OrderForm::default(),
            flow: OrderFlow::default(),
            nav: Navigator::default(),
            cart_open: false,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn form(&self) -> &OrderForm {
        &self.form
    }

    #[must_use]
    pub const fn order_status(&self) -> OrderStatus {
        self.flow.status()
    }

    #[must_use]
    pub const fn is_toast_visible(&self) -> bool {
        self.flow.is_toast_visible()
    }

    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.nav.active()
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Add one unit of a catalog product.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProduct` if `id` is not in the catalog, or
    /// `InProgress` while an order is being submitted.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<&Product, PageError> {
        self.ensure_cart_editable()?;
        let product = self.catalog.get(id).ok_or(PageError::UnknownProduct(id))?;
        self.cart.add(product);
        Ok(product)
    }

    /// # Errors
    ///
    /// Returns `InProgress` while an order is being submitted.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<(), PageError> {
        self.ensure_cart_editable()?;
        self.cart.remove(id);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `InProgress` while an order is being submitted.
    pub fn change_quantity(&mut self, id: ProductId, delta: i32) -> Result<(), PageError> {
        self.ensure_cart_editable()?;
        self.cart.change_quantity(id, delta);
        Ok(())
    }

    /// The cart is frozen between the order snapshot and its outcome, so
    /// clearing it on confirmation only drops what was ordered.
    fn ensure_cart_editable(&self) -> Result<(), PageError> {
        if self.flow.status() == OrderStatus::Submitting {
            return Err(OrderError::InProgress.into());
        }
        Ok(())
    }

    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Keep the visitor's in-progress form input.
    pub fn update_form(&mut self, form: OrderForm) {
        self.form = form;
    }

    /// Highlight `section` and return its anchor.
    pub const fn select_section(&mut self, section: Section) -> &'static str {
        self.nav.select(section)
    }

    /// Start submitting an order and snapshot it.
    ///
    /// The form is kept even when validation fails so the visitor can fix it.
    ///
    /// # Errors
    ///
    /// Returns an `OrderError` for blank required fields, an empty cart, or a
    /// submission already in flight.
    pub fn submit_order(&mut self, form: OrderForm) -> Result<Order, PageError> {
        self.form = form;
        self.form.validate()?;
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart.into());
        }
        self.flow.begin()?;
        Ok(Order::from_cart(&self.form, &self.cart))
    }

    /// Finish a submitted order: clear cart and form, close the drawer and
    /// show the toast.
    pub fn complete_order(&mut self) -> DismissTicket {
        self.cart.clear();
        self.form = OrderForm::default();
        self.cart_open = false;
        self.flow.confirm()
    }

    /// Give up on a submitted order. The cart and form are kept.
    pub fn fail_order(&mut self) {
        self.flow.abort();
    }

    /// Accept a contact-form message and show the toast.
    ///
    /// # Errors
    ///
    /// Returns an `OrderError` for blank required fields or while an order
    /// is being submitted.
    pub fn submit_contact(
        &mut self,
        message: &ContactMessage,
    ) -> Result<DismissTicket, PageError> {
        message.validate()?;
        if self.flow.status() == OrderStatus::Submitting {
            return Err(OrderError::InProgress.into());
        }
        Ok(self.flow.confirm())
    }

    /// Hide the toast shown for `ticket`, if it is still the current one.
    pub fn dismiss_toast(&mut self, ticket: DismissTicket) -> bool {
        self.flow.dismiss(ticket)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn controller() -> PageController {
        PageController::new(Arc::new(Catalog::seed()))
    }

    fn form() -> OrderForm {
        OrderForm {
            name: "Мария".to_string(),
            phone: "+7 900 123-45-67".to_string(),
            address: "ул. Липовая, 5".to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_add_unknown_product() {
        let mut page = controller();
        assert_eq!(
            page.add_to_cart(ProductId::new(0)).unwrap_err(),
            PageError::UnknownProduct(ProductId::new(0))
        );
        assert!(page.cart().is_empty());
    }

    #[test]
    fn test_order_clears_state() {
        let mut page = controller();
        page.add_to_cart(ProductId::new(1)).unwrap();
        page.add_to_cart(ProductId::new(1)).unwrap();
        page.add_to_cart(ProductId::new(2)).unwrap();
        page.open_cart();

        let order = page.submit_order(form()).unwrap();
        assert_eq!(order.item_count, 3);
        assert_eq!(order.total, Price::new(680 * 2 + 720));
        assert_eq!(page.order_status(), OrderStatus::Submitting);

        let ticket = page.complete_order();
        assert_eq!(page.cart().item_count(), 0);
        assert_eq!(page.form(), &OrderForm::default());
        assert!(!page.is_cart_open());
        assert!(page.is_toast_visible());

        assert!(page.dismiss_toast(ticket));
        assert_eq!(page.order_status(), OrderStatus::Idle);
    }

    #[test]
    fn test_invalid_order_keeps_input() {
        let mut page = controller();
        page.add_to_cart(ProductId::new(3)).unwrap();

        let mut partial = form();
        partial.phone = " ".to_string();
        assert_eq!(
            page.submit_order(partial.clone()).unwrap_err(),
            PageError::Order(OrderError::MissingPhone)
        );
        assert_eq!(page.form(), &partial);
        assert_eq!(page.cart().item_count(), 1);
        assert_eq!(page.order_status(), OrderStatus::Idle);
    }

    #[test]
    fn test_empty_cart_order_rejected() {
        let mut page = controller();
        assert_eq!(
            page.submit_order(form()).unwrap_err(),
            PageError::Order(OrderError::EmptyCart)
        );
    }

    #[test]
    fn test_failed_order_keeps_cart() {
        let mut page = controller();
        page.add_to_cart(ProductId::new(4)).unwrap();
        page.submit_order(form()).unwrap();
        page.fail_order();

        assert_eq!(page.order_status(), OrderStatus::Idle);
        assert_eq!(page.cart().item_count(), 1);
        assert_eq!(page.form().name, "Мария");
    }

    #[test]
    fn test_cart_frozen_while_submitting() {
        let mut page = controller();
        page.add_to_cart(ProductId::new(1)).unwrap();
        page.submit_order(form()).unwrap();

        let in_progress = PageError::Order(OrderError::InProgress);
        assert_eq!(page.add_to_cart(ProductId::new(7)).unwrap_err(), in_progress);
        assert_eq!(page.change_quantity(ProductId::new(1), 2).unwrap_err(), in_progress);
        assert_eq!(page.remove_from_cart(ProductId::new(1)).unwrap_err(), in_progress);
        assert_eq!(page.cart().item_count(), 1);

        page.complete_order();
        assert_eq!(page.cart().item_count(), 0);
        page.add_to_cart(ProductId::new(7)).unwrap();
        assert_eq!(page.cart().item_count(), 1);
    }

    #[test]
    fn test_failed_order_unfreezes_cart() {
        let mut page = controller();
        page.add_to_cart(ProductId::new(2)).unwrap();
        page.submit_order(form()).unwrap();
        page.fail_order();

        page.change_quantity(ProductId::new(2), 1).unwrap();
        assert_eq!(page.cart().quantity_of(ProductId::new(2)), 2);
    }

    #[test]
    fn test_contact_shows_toast() {
        let mut page = controller();
        let ticket = page
            .submit_contact(&ContactMessage {
                name: "Олег".to_string(),
                contact: "+7 900 000-00-01".to_string(),
                message: "Есть ли мёд в сотах?".to_string(),
            })
            .unwrap();
        assert!(page.is_toast_visible());
        assert!(page.dismiss_toast(ticket));
    }

    #[test]
    fn test_select_section() {
        let mut page = controller();
        assert_eq!(page.active_section(), Section::Home);
        assert_eq!(page.select_section(Section::Contacts), "contacts");
        assert_eq!(page.active_section(), Section::Contacts);
    }
}
