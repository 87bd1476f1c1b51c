// ============================================================================
// SESSION STORE - Par de credenciales en almacenamiento durable
// ============================================================================

use std::rc::Rc;

use crate::models::auth::Credentials;
use crate::utils::constants::{STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN};
use crate::utils::storage::KeyValueStorage;

/// Dueño exclusivo de las claves `access_token` / `refresh_token`.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// localStorage del navegador, o memoria si el navegador lo niega
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        use crate::utils::storage::{LocalStorageBackend, MemoryStorage};

        match LocalStorageBackend::open() {
            Some(backend) => Self::new(Rc::new(backend)),
            None => {
                log::warn!("⚠️ [SESSION] localStorage no disponible, sesión solo en memoria");
                Self::new(Rc::new(MemoryStorage::new()))
            }
        }
    }

    pub fn save(&self, credentials: &Credentials) {
        self.storage.set_item(STORAGE_KEY_ACCESS_TOKEN, &credentials.access);
        self.storage.set_item(STORAGE_KEY_REFRESH_TOKEN, &credentials.refresh);
        log::info!("💾 [SESSION] Credenciales guardadas");
    }

    /// Ambas claves deben estar presentes y ser utilizables
    pub fn load(&self) -> Option<Credentials> {
        let access = self.read(STORAGE_KEY_ACCESS_TOKEN)?;
        let refresh = self.read(STORAGE_KEY_REFRESH_TOKEN)?;
        Some(Credentials { access, refresh })
    }

    pub fn clear(&self) {
        self.storage.remove_item(STORAGE_KEY_ACCESS_TOKEN);
        self.storage.remove_item(STORAGE_KEY_REFRESH_TOKEN);
    }

    fn read(&self, key: &str) -> Option<String> {
        let value = self.storage.get_item(key)?;
        let trimmed = value.trim();
        // Valores que deja un `setItem(key, undefined)` desde JS
        if trimmed.is_empty() || trimmed == "undefined" || trimmed == "null" {
            return None;
        }
        Some(trimmed.to_string())
    }
}
