// ============================================================================
// APP VIEW - Setup gate -> guard de sesión -> dashboard
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::AppState;
use crate::viewmodels::navigation::{route_guard, setup_gate, GateView, GuardView};
use crate::viewmodels::AppViewModel;
use crate::views::dashboard::render_dashboard;
use crate::views::forms::loading_screen;
use crate::views::login::render_login;
use crate::views::setup::render_setup;

pub fn render_app(vm: &Rc<AppViewModel>, ui: &AppState) -> Result<Element, JsValue> {
    let setup_phase = vm.setup.phase();
    match setup_gate(&setup_phase) {
        GateView::Loading => loading_screen("Checking system status..."),
        GateView::Setup(status) => render_setup(vm, ui, status),
        GateView::App => {
            let auth_phase = vm.auth.phase();
            match route_guard(&auth_phase) {
                GuardView::Loading => loading_screen("Loading..."),
                GuardView::Login => render_login(vm, ui),
                GuardView::Protected(user) => render_dashboard(vm, ui, user),
            }
        }
    }
}
