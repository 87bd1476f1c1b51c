// ============================================================================
// RESOURCE VIEWMODEL - Listado + alta de un recurso de gestión
// ============================================================================
// Todas las pantallas de gestión siguen la misma forma: cargar la lista,
// enviar el formulario y agregar el resultado al estado local.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::academic::{Resource, Trimmed};
use crate::models::validation::Validate;
use crate::services::ApiClient;
use crate::state::ReactiveState;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

pub struct ResourceViewModel<R: Resource> {
    api: Rc<ApiClient>,
    state: ReactiveState<ListState<R>>,
    fetched: Cell<bool>,
}

impl<R: Resource> ResourceViewModel<R> {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self {
            api,
            state: ReactiveState::default(),
            fetched: Cell::new(false),
        }
    }

    pub fn snapshot(&self) -> ListState<R> {
        self.state.get()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.state.subscribe(callback);
    }

    /// Primera visita a la pantalla: carga solo si nunca se pidió la lista
    pub async fn load_once(&self) {
        if self.fetched.get() {
            return;
        }
        self.load().await;
    }

    pub async fn load(&self) {
        self.fetched.set(true);
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match self.api.list::<R>().await {
            Ok(items) => {
                log::info!("📋 [{}] {} elementos cargados", R::LABEL, items.len());
                self.state.update(|s| {
                    s.items = items;
                    s.loading = false;
                });
            }
            Err(e) => {
                log::error!("❌ [{}] Error cargando lista: {}", R::LABEL, e);
                let message = e.user_message(&format!("Failed to load {}", R::LABEL.to_lowercase()));
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
            }
        }
    }

    /// Vuelve al estado inicial; la próxima visita recarga desde el backend
    pub fn reset(&self) {
        let was_fetched = self.fetched.replace(false);
        let dirty = self
            .state
            .with(|s| s.loading || s.error.is_some() || !s.items.is_empty());
        if was_fetched || dirty {
            log::info!("🧹 [{}] Lista descartada", R::LABEL);
            self.state.set(ListState::default());
        }
    }

    /// Alta: recorta, valida, hace POST y agrega el creado al final de la lista local.
    pub async fn create(&self, draft: &R::Draft) -> Result<R, String> {
        let fallback = format!("Failed to create {}", R::LABEL.to_lowercase());
        let draft = draft.trimmed();
        draft.validate().map_err(|e| e.user_message(&fallback))?;

        match self.api.create::<R>(&draft).await {
            Ok(created) => {
                log::info!("✅ [{}] Creado {}", R::LABEL, created.id());
                let item = created.clone();
                self.state.update(move |s| s.items.push(item));
                Ok(created)
            }
            Err(e) => {
                log::error!("❌ [{}] Error creando: {}", R::LABEL, e);
                Err(e.user_message(&fallback))
            }
        }
    }
}
