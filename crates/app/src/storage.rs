//! Session storage selection. Browser builds persist to `localStorage`;
//! everything else keeps the session in memory for the life of the process.

use devayu_types::SessionStore;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageBackend;

/// Session store for this platform.
pub fn default_store() -> SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(backend) = LocalStorageBackend::open() {
            return SessionStore::new(std::rc::Rc::new(backend));
        }
        tracing::warn!("localStorage unavailable, session will not survive a reload");
    }
    SessionStore::in_memory()
}

#[cfg(target_arch = "wasm32")]
mod local {
    use devayu_types::{AppError, SessionBackend};

    /// `window.localStorage`, shared by every tab of the origin.
    pub struct LocalStorageBackend {
        storage: web_sys::Storage,
    }

    impl LocalStorageBackend {
        /// `None` when there is no window or storage access is blocked.
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl SessionBackend for LocalStorageBackend {
        fn read(&self, key: &str) -> Option<String> {
            match self.storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = ?e, "localStorage read failed");
                    None
                }
            }
        }

        fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| AppError::storage(format!("write {key}: {e:?}")))
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            self.storage
                .remove_item(key)
                .map_err(|e| AppError::storage(format!("remove {key}: {e:?}")))
        }

        fn clear(&self) -> Result<(), AppError> {
            self.storage
                .clear()
                .map_err(|e| AppError::storage(format!("clear: {e:?}")))
        }
    }
}
