// ============================================================================
// APP VIEWMODEL - Composición: Setup Gate -> Auth -> Guard -> Router
// ============================================================================
// El orden de arranque vive aquí: auth no se monta hasta que el gate de
// setup está completo, y se monta una sola vez.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::academic::{Course, Department, Program};
use crate::models::auth::User;
use crate::services::ApiClient;
use crate::state::ReactiveState;
use crate::stores::SessionStore;
use crate::viewmodels::auth_viewmodel::AuthViewModel;
use crate::viewmodels::navigation::{screen_for, Screen, Tab};
use crate::viewmodels::resource_viewmodel::ResourceViewModel;
use crate::viewmodels::setup_viewmodel::{SetupForm, SetupViewModel};

pub struct AppViewModel {
    pub setup: SetupViewModel,
    pub auth: AuthViewModel,
    pub departments: ResourceViewModel<Department>,
    pub programs: ResourceViewModel<Program>,
    pub courses: ResourceViewModel<Course>,
    pub users: ResourceViewModel<User>,
    selected_tab: ReactiveState<String>,
    auth_started: Cell<bool>,
}

impl AppViewModel {
    pub fn new(api: Rc<ApiClient>, session: Rc<SessionStore>) -> Self {
        Self {
            setup: SetupViewModel::new(api.clone(), session.clone()),
            auth: AuthViewModel::new(api.clone(), session),
            departments: ResourceViewModel::new(api.clone()),
            programs: ResourceViewModel::new(api.clone()),
            courses: ResourceViewModel::new(api.clone()),
            users: ResourceViewModel::new(api),
            selected_tab: ReactiveState::new(Tab::Dashboard.id().to_string()),
            auth_started: Cell::new(false),
        }
    }

    /// Arranque: primero el gate de setup, luego (si procede) el resume de auth.
    pub async fn boot(&self) {
        self.setup.mount().await;
        self.start_auth().await;
    }

    async fn start_auth(&self) {
        if !self.setup.phase().is_complete() {
            log::info!("🏫 [APP] Setup incompleto, auth no se monta");
            return;
        }
        if self.auth_started.replace(true) {
            return;
        }
        self.auth.mount().await;
        if self.auth.current_user().is_none() {
            self.clear_lists();
        }
    }

    /// Envío del wizard; al completarse monta auth con la credencial recién guardada.
    pub async fn complete_setup(&self, form: &SetupForm) -> Result<(), String> {
        self.setup.initialize(form).await?;
        self.start_auth().await;
        Ok(())
    }

    pub fn selected_tab(&self) -> String {
        self.selected_tab.get()
    }

    pub fn select_tab(&self, tab_id: &str) {
        log::info!("🗂️ [APP] Pestaña: {}", tab_id);
        self.selected_tab.set(tab_id.to_string());
    }

    /// Pantalla actual, solo con usuario resuelto
    pub fn current_screen(&self) -> Option<Screen> {
        let user = self.auth.current_user()?;
        Some(self.selected_tab.with(|tab| screen_for(user.role, tab)))
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.clear_lists();
        self.selected_tab.set(Tab::Dashboard.id().to_string());
    }

    /// Las listas son de la sesión: la siguiente sesión las vuelve a pedir
    fn clear_lists(&self) {
        self.departments.reset();
        self.programs.reset();
        self.courses.reset();
        self.users.reset();
    }

    /// Un único callback para cualquier cambio de estado que afecte al render
    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        let callback = Rc::new(callback);
        let notify = |cb: &Rc<F>| {
            let cb = cb.clone();
            move || (*cb)()
        };
        self.setup.subscribe(notify(&callback));
        self.auth.subscribe(notify(&callback));
        self.departments.subscribe(notify(&callback));
        self.programs.subscribe(notify(&callback));
        self.courses.subscribe(notify(&callback));
        self.users.subscribe(notify(&callback));
        self.selected_tab.subscribe(notify(&callback));
    }
}
