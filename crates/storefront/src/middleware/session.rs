//! Session middleware configuration.
//!
//! Sessions only carry the visitor id; they live in memory and vanish on
//! restart along with the page state they point to.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "paseka_session";

/// Session keys.
pub mod keys {
    /// Key for the visitor id that locates the page state.
    pub const VISITOR_ID: &str = "visitor_id";
}

/// Create the session layer with an in-memory store.
///
/// The cookie expires after the same idle period as the page state.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let idle_seconds = i64::try_from(config.visitor_idle.as_secs()).unwrap_or(i64::MAX);

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(idle_seconds),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
