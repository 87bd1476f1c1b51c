// ============================================================================
// APP - Raíz de la aplicación: monta en #app y re-renderiza ante cambios
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::stores::SessionStore;
use crate::viewmodels::AppViewModel;
use crate::views::render_app;

pub struct App {
    vm: Rc<AppViewModel>,
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let api = Rc::new(ApiClient::from_config());
        let session = Rc::new(SessionStore::browser());
        log::info!("🌐 [APP] API base: {}", api.base_url());
        let vm = Rc::new(AppViewModel::new(api, session));

        // Varios cambios seguidos -> un solo re-render en el siguiente tick
        let scheduled = Rc::new(Cell::new(false));
        vm.subscribe(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            vm,
            state: AppState::new(),
            root,
        })
    }

    /// Setup gate primero; auth se monta solo cuando el gate lo permite
    pub fn start(&self) {
        let vm = self.vm.clone();
        spawn_local(async move {
            vm.boot().await;
        });
    }

    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.vm, &self.state)?;
        append_child(&self.root, &view)
    }
}
