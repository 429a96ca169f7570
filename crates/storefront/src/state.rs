//! Application state shared across handlers.

use std::sync::Arc;

use paseka_core::Catalog;

use crate::config::StorefrontConfig;
use crate::content::PageContent;
use crate::services::{LogOrderSink, OrderSink};
use crate::visitors::VisitorRegistry;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog, the live visitor page states and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    content: PageContent,
    visitors: VisitorRegistry,
    orders: Arc<dyn OrderSink>,
}

impl AppState {
    /// Create application state with the seed catalog and the logging order sink.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_order_sink(config, Arc::new(LogOrderSink))
    }

    /// Create application state with a custom order sink.
    #[must_use]
    pub fn with_order_sink(config: StorefrontConfig, orders: Arc<dyn OrderSink>) -> Self {
        let catalog = Arc::new(Catalog::seed());
        let visitors = VisitorRegistry::new(
            Arc::clone(&catalog),
            config.visitor_idle,
            config.max_visitors,
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content: PageContent::default(),
                visitors,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the static page content.
    #[must_use]
    pub fn content(&self) -> &PageContent {
        &self.inner.content
    }

    /// Get a reference to the visitor registry.
    #[must_use]
    pub fn visitors(&self) -> &VisitorRegistry {
        &self.inner.visitors
    }

    /// Get a reference to the order sink.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderSink {
        self.inner.orders.as_ref()
    }
}
