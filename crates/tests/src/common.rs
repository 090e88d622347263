use devayu_types::{MemoryBackend, NavItem, SessionBackend, SessionStore};
use std::rc::Rc;

/// Store over a backend the test can also inspect directly.
pub fn store_with_backend() -> (SessionStore, Rc<MemoryBackend>) {
    let backend = Rc::new(MemoryBackend::new());
    let store = SessionStore::new(backend.clone());
    (store, backend)
}

/// Two stores over one backend, like two tabs of the same origin.
pub fn two_tabs() -> (SessionStore, SessionStore) {
    let backend: Rc<dyn SessionBackend> = Rc::new(MemoryBackend::new());
    (SessionStore::new(backend.clone()), SessionStore::new(backend))
}

pub fn labels(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|i| i.label).collect()
}

pub fn paths(items: &[NavItem]) -> Vec<String> {
    items.iter().map(|i| i.path.clone()).collect()
}
