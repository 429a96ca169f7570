//! In-page section navigation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, scroll-anchored region of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Delivery,
    Contacts,
}

/// Unknown section anchor.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Catalog,
        Self::About,
        Self::Delivery,
        Self::Contacts,
    ];

    /// Element id the viewport scrolls to.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::About => "about",
            Self::Delivery => "delivery",
            Self::Contacts => "contacts",
        }
    }

    /// Localized navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::About => "О продукции",
            Self::Delivery => "Доставка",
            Self::Contacts => "Контакты",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Tracks which section is highlighted in the navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    active: Section,
}

impl Navigator {
    /// Make `section` active and return the anchor to scroll to.
    pub const fn select(&mut self, section: Section) -> &'static str {
        self.active = section;
        section.anchor()
    }

    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_roundtrip() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_anchor() {
        assert_eq!(
            "shop".parse::<Section>().unwrap_err(),
            UnknownSection("shop".to_string())
        );
    }

    #[test]
    fn test_navigator_defaults_to_home() {
        assert_eq!(Navigator::default().active(), Section::Home);
    }

    #[test]
    fn test_select_returns_anchor() {
        let mut nav = Navigator::default();
        assert_eq!(nav.select(Section::Delivery), "delivery");
        assert_eq!(nav.active(), Section::Delivery);
    }
}
