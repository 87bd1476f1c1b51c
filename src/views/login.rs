// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AppViewModel;
use crate::views::forms::{error_banner, submit_button, text_field};

pub fn render_login(vm: &Rc<AppViewModel>, ui: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");
    let form_state = ui.login.clone();
    let values = form_state.snapshot();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("LMS Portal").build())?
        .child(ElementBuilder::new("p")?.text("Sign in to your account").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();

    let email = {
        let form_state = form_state.clone();
        text_field("email", "Email", "email", &values.email, move |v| {
            form_state.edit(|f| f.email = v)
        })?
    };
    let password = {
        let form_state = form_state.clone();
        text_field("password", "Password", "password", &values.password, move |v| {
            form_state.edit(|f| f.password = v)
        })?
    };

    if let Some(banner) = error_banner(form_state.error().as_deref())? {
        append_child(&form, &banner)?;
    }
    append_child(&form, &email)?;
    append_child(&form, &password)?;
    append_child(&form, &submit_button("Sign in", "Signing in...", form_state.is_busy())?)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            if !form_state.begin() {
                return;
            }
            crate::rerender_app();

            let vm = vm.clone();
            let form_state = form_state.clone();
            spawn_local(async move {
                let submitted = form_state.snapshot();
                let result = vm.auth.submit_login(&submitted).await.map(|user| {
                    log::info!("🔐 [LOGIN] Sesión iniciada como {}", user.role.label());
                });
                if result.is_ok() {
                    // dashboard siempre arranca en su pestaña por defecto
                    vm.select_tab("dashboard");
                    form_state.reset(Default::default());
                } else {
                    form_state.finish(result);
                }
                crate::rerender_app();
            });
        })?;
    }

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(header)?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container)?
        .build())
}
