use devayu_types::{access_redirect, AppError, Role, Session, SessionStore};
use dioxus::prelude::*;

/// Session handle shared through context.
///
/// Writes go straight to the [`SessionStore`]; `current` is refreshed after
/// each one so components that read it re-render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    store: Signal<SessionStore>,
    pub current: Signal<Session>,
}

impl SessionState {
    pub fn new(store: SessionStore) -> Self {
        let current = store.snapshot();
        Self {
            store: Signal::new(store),
            current: Signal::new(current),
        }
    }

    /// Handle to the underlying store, without subscribing.
    pub fn store(&self) -> SessionStore {
        self.store.peek().clone()
    }

    /// Re-read storage, picking up writes made outside this handle.
    pub fn refresh(&mut self) {
        let snapshot = self.store.peek().snapshot();
        if *self.current.peek() != snapshot {
            self.current.set(snapshot);
        }
    }

    /// Stored role, `None` when absent or unknown. Subscribes to changes.
    pub fn stored_role(&self) -> Option<Role> {
        let _subscribe = self.current.read();
        self.store.peek().stored_role()
    }

    pub fn access_redirect(&self, path: &str, guard_enabled: bool) -> Option<&'static str> {
        let _subscribe = self.current.read();
        access_redirect(path, &self.store.peek(), guard_enabled)
    }

    fn apply(
        &mut self,
        action: impl FnOnce(&SessionStore) -> Result<(), AppError>,
    ) -> Result<(), AppError> {
        let result = action(&self.store());
        if let Err(e) = &result {
            tracing::warn!(error = %e, "session write failed");
        }
        self.refresh();
        result
    }

    pub fn login(&mut self, email: &str) -> Result<(), AppError> {
        self.apply(|s| s.login(email))
    }

    pub fn register(&mut self, full_name: &str, email: &str) -> Result<(), AppError> {
        self.apply(|s| s.register(full_name, email))
    }

    pub fn select_role(&mut self, role: Role) -> Result<(), AppError> {
        self.apply(|s| s.select_role(role))
    }

    pub fn update_profile(&mut self, full_name: &str, email: &str) -> Result<(), AppError> {
        self.apply(|s| s.update_profile(full_name, email))
    }

    pub fn abandon_login(&mut self) -> Result<(), AppError> {
        self.apply(SessionStore::abandon_login)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.apply(SessionStore::logout)
    }

    pub fn delete_account(&mut self) -> Result<(), AppError> {
        self.apply(SessionStore::delete_account)
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
