//! The product catalog.
//!
//! The catalog is fixed at startup and read-only afterwards. [`Catalog::seed`]
//! returns the apiary's eight products in display order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Errors building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a zero price")]
    ZeroPrice(ProductId),
}

/// A product offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price of one unit.
    pub price: Price,
    /// Free-text unit label, e.g. `500г`.
    pub unit: String,
    /// Emoji shown in place of a product photo.
    pub glyph: String,
    /// Promotional badge such as `Хит`.
    pub badge: Option<String>,
}

impl Product {
    fn seed(
        id: i32,
        name: &str,
        description: &str,
        price: u64,
        unit: &str,
        glyph: &str,
        badge: Option<&str>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::new(price),
            unit: unit.to_string(),
            glyph: glyph.to_string(),
            badge: badge.map(String::from),
        }
    }
}

/// An ordered, read-only list of products with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two products share an id or a product is free.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price == Price::ZERO {
                return Err(CatalogError::ZeroPrice(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The apiary's catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: vec![
                Product::seed(
                    1,
                    "Мёд липовый",
                    "Светло-янтарный, нежный аромат цветущей липы. Собран в июле.",
                    680,
                    "500г",
                    "🍯",
                    Some("Хит"),
                ),
                Product::seed(
                    2,
                    "Мёд гречишный",
                    "Тёмный, насыщенный вкус с пряными нотками. Богат железом.",
                    720,
                    "500г",
                    "🫙",
                    None,
                ),
                Product::seed(
                    3,
                    "Мёд луговой",
                    "Многоцветковый, ароматный. Собран с разнотравья полевых лугов.",
                    650,
                    "500г",
                    "🌸",
                    None,
                ),
                Product::seed(
                    4,
                    "Мёд таёжный",
                    "Редкий сорт. Кедр, лиственница, дикие травы сибирской тайги.",
                    890,
                    "500г",
                    "🌲",
                    Some("Редкий"),
                ),
                Product::seed(
                    5,
                    "Прополис настойка",
                    "Натуральный прополис на спирту. Мощный природный антисептик.",
                    380,
                    "50мл",
                    "💧",
                    None,
                ),
                Product::seed(
                    6,
                    "Перга пчелиная",
                    "Законсервированная пчёлами пыльца. Кладезь витаминов и белка.",
                    950,
                    "200г",
                    "🌼",
                    Some("Новинка"),
                ),
                Product::seed(
                    7,
                    "Маточное молочко",
                    "Концентрированный продукт для иммунитета и долголетия.",
                    1200,
                    "30г",
                    "✨",
                    None,
                ),
                Product::seed(
                    8,
                    "Воск пчелиный",
                    "Натуральный жёлтый воск. Для косметики, свечей и пропитки.",
                    290,
                    "200г",
                    "🕯️",
                    None,
                ),
            ],
        }
    }

    /// Products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
