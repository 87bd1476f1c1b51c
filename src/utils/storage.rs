use std::cell::RefCell;
use std::collections::HashMap;

/// Almacenamiento clave/valor best-effort (localStorage en el navegador).
/// Ninguna operación falla: un backend inaccesible se comporta como vacío.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Almacenamiento en memoria. Fallback cuando el navegador niega localStorage.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{get_local_storage, LocalStorageBackend};

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{window, Storage};

    use super::KeyValueStorage;

    pub fn get_local_storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    /// `window.localStorage` con valores en texto plano (sin JSON)
    pub struct LocalStorageBackend {
        storage: Storage,
    }

    impl LocalStorageBackend {
        /// `None` si el navegador no expone localStorage (modo privado, iframes)
        pub fn open() -> Option<Self> {
            get_local_storage().map(|storage| Self { storage })
        }
    }

    impl KeyValueStorage for LocalStorageBackend {
        fn get_item(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set_item(&self, key: &str, value: &str) {
            if self.storage.set_item(key, value).is_err() {
                log::warn!("⚠️ [STORAGE] No se pudo guardar '{}' en localStorage", key);
            }
        }

        fn remove_item(&self, key: &str) {
            let _ = self.storage.remove_item(key);
        }
    }
}
