//! Catalog listing.

use paseka_core::{Catalog, Product};

/// Format one catalog row.
fn row(product: &Product) -> String {
    format!(
        "{:>2}  {} {:<20} {:>8}  {:<6} {}",
        product.id.as_i32(),
        product.glyph,
        product.name,
        product.price.to_string(),
        product.unit,
        product.badge.as_deref().unwrap_or("")
    )
}

/// Render the whole seed catalog as a table.
#[must_use]
pub fn render(catalog: &Catalog) -> String {
    let mut out = format!(
        "{:>2}  {:<22} {:>8}  {:<6} {}\n",
        "ID", "Товар", "Цена", "Фасовка", "Метка"
    );
    for product in catalog.products() {
        out.push_str(&row(product));
        out.push('\n');
    }
    out
}

/// Print the seed catalog.
#[allow(clippy::print_stdout)]
pub fn print() {
    print!("{}", render(&Catalog::seed()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_product() {
        let table = render(&Catalog::seed());
        assert_eq!(table.lines().count(), 9);
        assert!(table.contains("Мёд липовый"));
        assert!(table.contains("1200 ₽"));
        assert!(table.contains("Новинка"));
    }
}
