//! Order quotes from the command line.
//!
//! Items are written as `id` or `idxqty`, e.g. `4x3` for three jars of
//! taiga honey. The cart is built with the same operations the storefront
//! uses, so totals match what a visitor would see.

use std::num::ParseIntError;

use paseka_core::{Cart, Catalog, ProductId};
use thiserror::Error;

/// Errors that can occur while building a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Item is not `id` or `idxqty`.
    #[error("Malformed item '{0}': expected ID or IDxQTY")]
    Malformed(String),

    /// Id or quantity is not a number.
    #[error("Invalid number in '{item}': {source}")]
    InvalidNumber {
        item: String,
        source: ParseIntError,
    },

    /// Quantity is zero or too large.
    #[error("Quantity in '{0}' must be between 1 and {max}", max = i32::MAX)]
    InvalidQuantity(String),

    /// Product id not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed `id[xqty]` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Parse an `id` or `idxqty` item.
///
/// # Errors
///
/// Returns `QuoteError` for malformed items or out-of-range quantities.
pub fn parse_item(item: &str) -> Result<QuoteItem, QuoteError> {
    let mut parts = item.trim().split(['x', 'X', '*']);
    let id = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| QuoteError::Malformed(item.to_string()))?;
    let quantity = parts.next();
    if parts.next().is_some() {
        return Err(QuoteError::Malformed(item.to_string()));
    }

    let invalid = |source| QuoteError::InvalidNumber {
        item: item.to_string(),
        source,
    };

    let product_id: ProductId = id.parse().map_err(invalid)?;
    let quantity = match quantity {
        Some(q) => q.trim().parse::<u32>().map_err(invalid)?,
        None => 1,
    };
    if quantity == 0 || i32::try_from(quantity).is_err() {
        return Err(QuoteError::InvalidQuantity(item.to_string()));
    }

    Ok(QuoteItem {
        product_id,
        quantity,
    })
}

/// Build a cart from parsed items.
///
/// # Errors
///
/// Returns `UnknownProduct` for ids missing from the catalog.
pub fn build_cart(catalog: &Catalog, items: &[QuoteItem]) -> Result<Cart, QuoteError> {
    let mut cart = Cart::new();
    for item in items {
        let product = catalog
            .get(item.product_id)
            .ok_or(QuoteError::UnknownProduct(item.product_id))?;
        cart.add(product);
        // Quantity was checked to fit in i32 while parsing
        let extra = i32::try_from(item.quantity - 1).unwrap_or(i32::MAX);
        cart.change_quantity(item.product_id, extra);
    }
    Ok(cart)
}

/// Render a cart as a human-readable quote.
#[must_use]
pub fn render(cart: &Cart) -> String {
    let mut out = String::new();
    for entry in cart.entries() {
        out.push_str(&format!(
            "{} {:<20} {:>4} × {:>8} = {:>10}\n",
            entry.product.glyph,
            entry.product.name,
            entry.quantity,
            entry.product.price.to_string(),
            entry.line_total().display_grouped(),
        ));
    }
    out.push_str(&format!(
        "Товаров: {}, итого: {}\n",
        cart.item_count(),
        cart.total().display_grouped()
    ));
    out
}

/// Parse `items`, price them against the seed catalog and print the result.
///
/// # Errors
///
/// Returns `QuoteError` for malformed items or unknown products.
#[allow(clippy::print_stdout)]
pub fn run(items: &[String], json: bool) -> Result<(), QuoteError> {
    let parsed = items
        .iter()
        .map(|item| parse_item(item))
        .collect::<Result<Vec<_>, _>>()?;
    let cart = build_cart(&Catalog::seed(), &parsed)?;

    tracing::debug!(lines = cart.entries().len(), "Quote built");

    if json {
        println!("{}", serde_json::to_string_pretty(&cart)?);
    } else {
        print!("{}", render(&cart));
    }
    Ok(())
}
