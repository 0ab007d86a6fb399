//! Browser storage adapters and the injected storage context.
//!
//! Views never touch browser globals directly: they resolve a
//! [`StorageContext`] from Leptos context and go through the
//! [`StoragePort`] seam, so tests can swap in in-memory stores.
//!
//! The adapters look the window up on every call instead of holding a
//! handle, which keeps them `Send + Sync` as Leptos context values must
//! be. Outside the browser (server-side rendering, native tests) every
//! read sees an empty store and writes report the store unavailable.

use std::sync::Arc;

use leptos::prelude::*;
use returnoscope_core::{MemoryStore, StorageError, StoragePort};

/// Which browser store an adapter talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Tab-scoped sessionStorage, cleared when the session ends.
    Session,
    /// Profile-scoped localStorage, persisting across sessions.
    Local,
}

/// [`StoragePort`] adapter over a browser key/value store.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    scope: Scope,
}

impl BrowserStore {
    /// Adapter over tab-scoped sessionStorage.
    #[must_use]
    pub fn session() -> Self {
        Self {
            scope: Scope::Session,
        }
    }

    /// Adapter over durable localStorage.
    #[must_use]
    pub fn local() -> Self {
        Self { scope: Scope::Local }
    }
}

#[cfg(feature = "hydrate")]
fn backing(scope: Scope) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match scope {
        Scope::Session => window.session_storage().ok().flatten(),
        Scope::Local => window.local_storage().ok().flatten(),
    }
}

impl StoragePort for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            backing(self.scope)?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.scope, key);
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = backing(self.scope).ok_or_else(|| StorageError::Unavailable {
                reason: "browser storage is not accessible".to_string(),
            })?;
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::WriteFailed {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.scope, key, value);
            Err(StorageError::Unavailable {
                reason: "no browser storage outside the browser".to_string(),
            })
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = backing(self.scope) {
            let _ = storage.remove_item(key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.scope, key);
        }
    }
}

/// Storage ports injected into the component tree by [`App`](crate::app::App).
#[derive(Clone)]
pub struct StorageContext {
    session: Arc<dyn StoragePort>,
    durable: Arc<dyn StoragePort>,
}

impl StorageContext {
    /// Context backed by the real browser stores.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            session: Arc::new(BrowserStore::session()),
            durable: Arc::new(BrowserStore::local()),
        }
    }

    /// Context backed by in-memory stores, for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            session: Arc::new(MemoryStore::new()),
            durable: Arc::new(MemoryStore::new()),
        }
    }

    /// The tab-scoped session store.
    #[must_use]
    pub fn session(&self) -> &dyn StoragePort {
        &*self.session
    }

    /// The durable store persisting across sessions.
    #[must_use]
    pub fn durable(&self) -> &dyn StoragePort {
        &*self.durable
    }
}

/// Resolves the storage context provided by the application root.
///
/// # Panics
///
/// Panics if called outside a tree under [`App`](crate::app::App).
#[must_use]
pub fn use_storage() -> StorageContext {
    expect_context::<StorageContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Without a browser, the adapters read as empty and reject writes
    #[test]
    fn browser_store_reads_empty_off_wasm() {
        assert_eq!(BrowserStore::session().get("userRole"), None);
        assert_eq!(BrowserStore::local().get("rememberedUsername"), None);
    }

    #[test]
    fn browser_store_remove_is_noop_off_wasm() {
        BrowserStore::session().remove("userRole");
        BrowserStore::local().remove("rememberedUsername");
    }

    #[test]
    fn browser_store_write_unavailable_off_wasm() {
        let result = BrowserStore::session().set("userRole", "trader");
        assert!(matches!(result, Err(StorageError::Unavailable { .. })));
    }

    #[test]
    fn in_memory_context_roundtrips() {
        let context = StorageContext::in_memory();
        context.session().set("userRole", "admin").expect("set");
        assert_eq!(context.session().get("userRole").as_deref(), Some("admin"));
        // The two scopes are distinct stores
        assert_eq!(context.durable().get("userRole"), None);
    }
}
