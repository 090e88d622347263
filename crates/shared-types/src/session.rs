//! Tab-wide session state: login flag, display name, email and role.
//!
//! The store is a thin typed layer over a string key-value [`SessionBackend`].
//! Reads never fail: a missing key (or a backend that cannot be read)
//! resolves to the key's documented default, so any page can render even if
//! the session was cleared behind its back, e.g. by a logout in another tab.

use crate::error::AppError;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Display name used when no `userName` is stored.
pub const DEFAULT_USER_NAME: &str = "User";

/// Display email used when no `userEmail` is stored.
pub const DEFAULT_USER_EMAIL: &str = "user@example.com";

/// Keys persisted in the backing store. Values are always strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    IsLoggedIn,
    UserName,
    UserEmail,
    UserRole,
}

pub const ALL_KEYS: &[SessionKey] = &[
    SessionKey::IsLoggedIn,
    SessionKey::UserName,
    SessionKey::UserEmail,
    SessionKey::UserRole,
];

impl SessionKey {
    /// Storage key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::IsLoggedIn => "isLoggedIn",
            SessionKey::UserName => "userName",
            SessionKey::UserEmail => "userEmail",
            SessionKey::UserRole => "userRole",
        }
    }

    /// Value returned by [`SessionStore::get`] when the key is absent.
    pub fn default_value(&self) -> &'static str {
        match self {
            SessionKey::IsLoggedIn => "false",
            SessionKey::UserName => DEFAULT_USER_NAME,
            SessionKey::UserEmail => DEFAULT_USER_EMAIL,
            SessionKey::UserRole => Role::default().as_str(),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value storage behind a [`SessionStore`].
///
/// Implementations use interior mutability; the UI is single-threaded.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
    /// Remove every key the backend holds, not only the session keys.
    fn clear(&self) -> Result<(), AppError>;
}

/// In-process backend. Used by tests and by non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// Point-in-time view of the session, with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub is_logged_in: bool,
    pub user_name: String,
    pub user_email: Option<String>,
    pub role: Role,
}

/// Injectable handle to the session. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Store over a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryBackend::new()))
    }

    /// Raw stored value, `None` when absent.
    pub fn raw(&self, key: SessionKey) -> Option<String> {
        self.backend.read(key.as_str())
    }

    /// Stored value or the key's default. The role is normalized: a value
    /// that is not a known role reads as the default role.
    pub fn get(&self, key: SessionKey) -> String {
        if key == SessionKey::UserRole {
            return self.role().as_str().to_string();
        }
        self.raw(key)
            .unwrap_or_else(|| key.default_value().to_string())
    }

    /// Overwrite a key. Role values outside the known set are rejected and
    /// the stored value is left unchanged.
    pub fn set(&self, key: SessionKey, value: &str) -> Result<(), AppError> {
        if key == SessionKey::UserRole {
            if let Err(e) = value.parse::<Role>() {
                tracing::warn!(value, "rejected write of unknown role");
                return Err(e);
            }
        }
        self.backend.write(key.as_str(), value)
    }

    pub fn remove(&self, key: SessionKey) -> Result<(), AppError> {
        self.backend.remove(key.as_str())
    }

    /// Remove everything from the backing store.
    pub fn clear_all(&self) -> Result<(), AppError> {
        self.backend.clear()
    }

    pub fn is_logged_in(&self) -> bool {
        self.raw(SessionKey::IsLoggedIn).as_deref() == Some("true")
    }

    /// Role as stored, `None` when absent or not a known role.
    pub fn stored_role(&self) -> Option<Role> {
        self.raw(SessionKey::UserRole)?.parse().ok()
    }

    /// Effective role; absent or stale values resolve to Patient.
    pub fn role(&self) -> Role {
        self.stored_role().unwrap_or_default()
    }

    pub fn user_name(&self) -> String {
        self.get(SessionKey::UserName)
    }

    pub fn user_email(&self) -> String {
        self.get(SessionKey::UserEmail)
    }

    pub fn snapshot(&self) -> Session {
        Session {
            is_logged_in: self.is_logged_in(),
            user_name: self.user_name(),
            user_email: self.raw(SessionKey::UserEmail),
            role: self.role(),
        }
    }

    /// Sign in with an email address. The display name becomes the part of
    /// the address before `@` and the role resets to Patient.
    pub fn login(&self, email: &str) -> Result<(), AppError> {
        let name = email.split('@').next().unwrap_or_default();
        self.backend.write(SessionKey::IsLoggedIn.as_str(), "true")?;
        self.backend.write(SessionKey::UserName.as_str(), name)?;
        self.backend
            .write(SessionKey::UserRole.as_str(), Role::Patient.as_str())?;
        tracing::info!(user = name, "signed in");
        Ok(())
    }

    /// Create an account and sign in as a Patient.
    pub fn register(&self, full_name: &str, email: &str) -> Result<(), AppError> {
        self.backend.write(SessionKey::IsLoggedIn.as_str(), "true")?;
        self.backend.write(SessionKey::UserName.as_str(), full_name)?;
        self.backend.write(SessionKey::UserEmail.as_str(), email)?;
        self.backend
            .write(SessionKey::UserRole.as_str(), Role::Patient.as_str())?;
        tracing::info!(user = full_name, "registered");
        Ok(())
    }

    pub fn select_role(&self, role: Role) -> Result<(), AppError> {
        self.backend.write(SessionKey::UserRole.as_str(), role.as_str())?;
        tracing::info!(%role, "role selected");
        Ok(())
    }

    pub fn update_profile(&self, full_name: &str, email: &str) -> Result<(), AppError> {
        self.backend.write(SessionKey::UserName.as_str(), full_name)?;
        self.backend.write(SessionKey::UserEmail.as_str(), email)?;
        Ok(())
    }

    /// Leave role selection without choosing: drop the login flag and role
    /// but keep the name and email.
    pub fn abandon_login(&self) -> Result<(), AppError> {
        self.remove(SessionKey::IsLoggedIn)?;
        self.remove(SessionKey::UserRole)
    }

    /// Remove the four session keys. Other keys in the store are untouched.
    pub fn logout(&self) -> Result<(), AppError> {
        for key in ALL_KEYS {
            self.remove(*key)?;
        }
        tracing::info!("signed out");
        Ok(())
    }

    pub fn delete_account(&self) -> Result<(), AppError> {
        self.clear_all()?;
        tracing::info!("account deleted");
        Ok(())
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.snapshot())
            .finish()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn store_with_backend() -> (SessionStore, Rc<MemoryBackend>) {
        let backend = Rc::new(MemoryBackend::new());
        (SessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn empty_store_reads_defaults() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get(SessionKey::UserRole), "patient");
        assert_eq!(store.get(SessionKey::UserName), "User");
        assert_eq!(store.get(SessionKey::UserEmail), "user@example.com");
        assert_eq!(store.get(SessionKey::IsLoggedIn), "false");
        assert!(!store.is_logged_in());
        assert_eq!(store.stored_role(), None);
    }

    #[test]
    fn role_roundtrip_and_clear() {
        let store = SessionStore::in_memory();
        store.set(SessionKey::UserRole, "doctor").unwrap();
        assert_eq!(store.get(SessionKey::UserRole), "doctor");
        store.clear_all().unwrap();
        assert_eq!(store.get(SessionKey::UserRole), "patient");
    }

    #[test]
    fn unknown_role_write_is_rejected() {
        let store = SessionStore::in_memory();
        store.set(SessionKey::UserRole, "pharma").unwrap();
        let err = store.set(SessionKey::UserRole, "nurse").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
        assert_eq!(store.get(SessionKey::UserRole), "pharma");
    }

    #[test]
    fn stale_role_written_elsewhere_defaults_to_patient() {
        let (store, backend) = store_with_backend();
        backend.write("userRole", "null").unwrap();
        assert_eq!(store.stored_role(), None);
        assert_eq!(store.role(), Role::Patient);
        assert_eq!(store.get(SessionKey::UserRole), "patient");
        // The untouched value is still visible through raw().
        assert_eq!(store.raw(SessionKey::UserRole).as_deref(), Some("null"));
    }

    #[test]
    fn unknown_role_from_backend_reads_as_patient() {
        let (store, backend) = store_with_backend();
        backend.write("userRole", "nurse").unwrap();
        assert_eq!(store.get(SessionKey::UserRole), "patient");
    }

    #[test]
    fn login_derives_name_from_email() {
        let store = SessionStore::in_memory();
        store.login("asha.k@example.org").unwrap();
        assert_eq!(
            store.snapshot(),
            Session {
                is_logged_in: true,
                user_name: "asha.k".to_string(),
                user_email: None,
                role: Role::Patient,
            }
        );
    }

    #[test]
    fn login_without_at_sign_uses_whole_input() {
        let store = SessionStore::in_memory();
        store.login("asha").unwrap();
        assert_eq!(store.user_name(), "asha");
    }

    #[test]
    fn login_resets_role_to_patient() {
        let store = SessionStore::in_memory();
        store.select_role(Role::Pharma).unwrap();
        store.login("a@b.c").unwrap();
        assert_eq!(store.role(), Role::Patient);
    }

    #[test]
    fn register_stores_name_and_email() {
        let store = SessionStore::in_memory();
        store.register("Asha Kumar", "asha@example.org").unwrap();
        assert!(store.is_logged_in());
        assert_eq!(store.user_name(), "Asha Kumar");
        assert_eq!(store.user_email(), "asha@example.org");
        assert_eq!(store.stored_role(), Some(Role::Patient));
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.select_role(Role::Doctor).unwrap();
        assert_eq!(other.role(), Role::Doctor);
        assert_eq!(store, other);
        assert_ne!(store, SessionStore::in_memory());
    }

    #[test]
    fn logout_keeps_unrelated_keys() {
        let (store, backend) = store_with_backend();
        backend.write("theme", "dark").unwrap();
        store.register("Asha", "asha@example.org").unwrap();
        store.logout().unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.raw(SessionKey::UserName), None);
        assert_eq!(backend.read("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn delete_account_clears_everything() {
        let (store, backend) = store_with_backend();
        backend.write("theme", "dark").unwrap();
        store.register("Asha", "asha@example.org").unwrap();
        store.delete_account().unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn abandon_login_keeps_name() {
        let store = SessionStore::in_memory();
        store.login("asha@example.org").unwrap();
        store.abandon_login().unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.stored_role(), None);
        assert_eq!(store.user_name(), "asha");
    }

    #[test]
    fn update_profile_overwrites_name_and_email() {
        let store = SessionStore::in_memory();
        store.register("Asha", "old@example.org").unwrap();
        store.update_profile("Asha K", "new@example.org").unwrap();
        assert_eq!(store.user_name(), "Asha K");
        assert_eq!(store.user_email(), "new@example.org");
    }
}
