//! Application state shared across handlers.

use std::sync::Arc;

use company_core::Authorizer;
use company_store::CompanyStore;

use crate::notify::Notifier;

/// Application state shared across all handlers.
///
/// Holds the three collaborators behind capability traits. This is
/// cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Company persistence.
    store: Arc<dyn CompanyStore>,
    /// Bearer token verifier.
    auth: Arc<dyn Authorizer>,
    /// Change event publisher.
    notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        store: Arc<dyn CompanyStore>,
        auth: Arc<dyn Authorizer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            auth,
            notifier,
        }
    }

    /// Get a reference to the company store.
    pub fn store(&self) -> &dyn CompanyStore {
        self.store.as_ref()
    }

    /// Get a reference to the token verifier.
    pub fn auth(&self) -> &dyn Authorizer {
        self.auth.as_ref()
    }

    /// Get a reference to the change notifier.
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
