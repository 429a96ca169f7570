//! In-memory page state for each visitor.
//!
//! Every visitor gets a [`PageController`] the first time they load the page.
//! The controllers live in a `moka` cache keyed by [`VisitorId`]; when a
//! visitor goes idle the entry is evicted and the page state is gone, the same
//! as closing the tab. Nothing is persisted.
//!
//! The confirmation toast is hidden by a tokio task spawned per confirmation.
//! The task holds only a `Weak` reference to its visitor, and dropping the
//! visitor aborts it, so an evicted page state is never touched again.

use std::sync::{Arc, Weak};
use std::time::Duration;

use moka::future::Cache;
use paseka_core::{Catalog, DismissTicket, PageController, VisitorId};
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::AbortHandle;

/// Mutable state guarded by the visitor's lock.
pub struct VisitorState {
    pub page: PageController,
    toast_timer: Option<AbortHandle>,
}

/// One visitor's page state.
pub struct Visitor {
    id: VisitorId,
    state: Mutex<VisitorState>,
}

impl Visitor {
    fn new(id: VisitorId, catalog: Arc<Catalog>) -> Self {
        Self {
            id,
            state: Mutex::new(VisitorState {
                page: PageController::new(catalog),
                toast_timer: None,
            }),
        }
    }

    #[must_use]
    pub const fn id(&self) -> VisitorId {
        self.id
    }

    /// Lock the page state. Each handler mutates under a single lock.
    pub async fn lock(&self) -> MutexGuard<'_, VisitorState> {
        self.state.lock().await
    }

    /// Hide the toast for `ticket` after `delay`.
    ///
    /// A timer still pending from an earlier confirmation is aborted.
    pub fn schedule_toast_dismiss(
        self: &Arc<Self>,
        state: &mut VisitorState,
        ticket: DismissTicket,
        delay: Duration,
    ) {
        let visitor: Weak<Self> = Arc::downgrade(self);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(visitor) = visitor.upgrade() else {
                return;
            };
            let mut state = visitor.lock().await;
            if state.page.dismiss_toast(ticket) {
                state.toast_timer = None;
                tracing::debug!(visitor = %visitor.id, "Toast dismissed");
            }
        });

        if let Some(previous) = state.toast_timer.replace(task.abort_handle()) {
            previous.abort();
        }
    }
}

impl Drop for Visitor {
    fn drop(&mut self) {
        if let Some(timer) = self.state.get_mut().toast_timer.take() {
            timer.abort();
        }
    }
}

/// All live visitor page states.
#[derive(Clone)]
pub struct VisitorRegistry {
    cache: Cache<VisitorId, Arc<Visitor>>,
    catalog: Arc<Catalog>,
}

impl VisitorRegistry {
    /// Create a registry that drops visitors idle for longer than `idle`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, idle: Duration, max_visitors: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_visitors)
            .time_to_idle(idle)
            .build();

        Self { cache, catalog }
    }

    /// Get the visitor's page state, creating a fresh one if it is missing
    /// or was torn down.
    pub async fn get_or_create(&self, id: VisitorId) -> Arc<Visitor> {
        let catalog = Arc::clone(&self.catalog);
        self.cache
            .get_with(id, async move {
                tracing::debug!(visitor = %id, "Page state created");
                Arc::new(Visitor::new(id, catalog))
            })
            .await
    }

    /// Look up a visitor without creating one.
    pub async fn get(&self, id: VisitorId) -> Option<Arc<Visitor>> {
        self.cache.get(&id).await
    }

    /// Tear down a visitor's page state.
    pub async fn remove(&self, id: VisitorId) {
        self.cache.invalidate(&id).await;
    }
}
