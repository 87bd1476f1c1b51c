// ============================================================================
// SETUP VIEW - Wizard de primera instalación
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::models::setup::SetupStatus;
use crate::state::{AppState, FormState};
use crate::viewmodels::{AppViewModel, SetupStep, SetupWizard};
use crate::views::forms::{error_banner, submit_button, text_field};

const STEPS: [SetupStep; 3] = [SetupStep::Institute, SetupStep::Administrator, SetupStep::Review];

pub fn render_setup(vm: &Rc<AppViewModel>, ui: &AppState, status: &SetupStatus) -> Result<Element, JsValue> {
    log::info!("🏫 [SETUP] render_setup() step={}", status.setup_step);
    let wizard_state = ui.setup.clone();
    let wizard = wizard_state.snapshot();

    let header = ElementBuilder::new("div")?
        .class("setup-header")
        .child(ElementBuilder::new("h1")?.text("Welcome! Let's set up your institute").build())?
        .child(step_indicator(wizard.step)?)?
        .build();

    let form = ElementBuilder::new("form")?.class("setup-form").build();
    if let Some(banner) = error_banner(wizard_state.error().as_deref())? {
        append_child(&form, &banner)?;
    }

    match wizard.step {
        SetupStep::Institute => {
            let ws = wizard_state.clone();
            append_child(
                &form,
                &text_field("institute_name", "Institute name", "text", &wizard.form.institute_name, move |v| {
                    ws.edit(|w| w.form.institute_name = v)
                })?,
            )?;
        }
        SetupStep::Administrator => {
            for field in administrator_fields(&wizard_state, &wizard)? {
                append_child(&form, &field)?;
            }
        }
        SetupStep::Review => append_child(&form, &review(&wizard)?)?,
    }

    let actions = ElementBuilder::new("div")?.class("setup-actions").build();
    if wizard.step != SetupStep::Institute {
        let back = ElementBuilder::new("button")?
            .class("btn-secondary")
            .attr("type", "button")?
            .flag("disabled", wizard_state.is_busy())?
            .text("Back")
            .build();
        let ws = wizard_state.clone();
        on_click(&back, move |_| {
            ws.edit(|w| {
                w.back();
            });
            ws.finish::<String>(Ok(()));
            crate::rerender_app();
        })?;
        append_child(&actions, &back)?;
    }
    let submit = if wizard.step == SetupStep::Review {
        submit_button("Complete setup", "Setting up...", wizard_state.is_busy())?
    } else {
        submit_button("Next", "Next", false)?
    };
    append_child(&actions, &submit)?;
    append_child(&form, &actions)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let step = wizard_state.with(|w| w.step);
            if step == SetupStep::Review {
                submit_wizard(&vm, &wizard_state);
            } else {
                let mut next = wizard_state.snapshot();
                let result = next.next().map(|_| ());
                if result.is_ok() {
                    wizard_state.edit(|w| w.step = next.step);
                }
                wizard_state.finish(result);
                crate::rerender_app();
            }
        })?;
    }

    let container = ElementBuilder::new("div")?
        .class("setup-container")
        .child(header)?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("setup-screen")
        .child(container)?
        .build())
}

fn submit_wizard(vm: &Rc<AppViewModel>, wizard_state: &FormState<SetupWizard>) {
    if !wizard_state.begin() {
        return;
    }
    crate::rerender_app();

    let vm = vm.clone();
    let wizard_state = wizard_state.clone();
    spawn_local(async move {
        let form = wizard_state.with(|w| w.form.clone());
        let result = vm.complete_setup(&form).await;
        if result.is_ok() {
            wizard_state.reset(SetupWizard::default());
        } else {
            wizard_state.finish(result);
        }
        crate::rerender_app();
    });
}

fn step_indicator(current: SetupStep) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ol")?.class("setup-steps").build();
    for step in STEPS {
        let class = match step.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => "setup-step done",
            std::cmp::Ordering::Equal => "setup-step active",
            std::cmp::Ordering::Greater => "setup-step",
        };
        let item = ElementBuilder::new("li")?
            .class(class)
            .text(&format!("{}. {}", step.index() + 1, step.title()))
            .build();
        append_child(&list, &item)?;
    }
    Ok(list)
}

fn administrator_fields(
    wizard_state: &FormState<SetupWizard>,
    wizard: &SetupWizard,
) -> Result<Vec<Element>, JsValue> {
    type Setter = fn(&mut SetupWizard, String);
    let fields: [(&str, &str, &str, &str, Setter); 4] = [
        ("admin_name", "Full name", "text", wizard.form.admin_name.as_str(), |w, v| w.form.admin_name = v),
        ("admin_email", "Email", "email", wizard.form.admin_email.as_str(), |w, v| w.form.admin_email = v),
        ("admin_password", "Password", "password", wizard.form.admin_password.as_str(), |w, v| w.form.admin_password = v),
        ("confirm_password", "Confirm password", "password", wizard.form.confirm_password.as_str(), |w, v| {
            w.form.confirm_password = v
        }),
    ];

    fields
        .into_iter()
        .map(|(id, label, kind, value, setter)| {
            let ws = wizard_state.clone();
            text_field(id, label, kind, value, move |v| ws.edit(|w| setter(w, v)))
        })
        .collect()
}

fn review(wizard: &SetupWizard) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("dl")?.class("setup-review").build();
    for (term, value) in [
        ("Institute", wizard.form.institute_name.as_str()),
        ("Administrator", wizard.form.admin_name.as_str()),
        ("Email", wizard.form.admin_email.as_str()),
    ] {
        append_child(&list, &ElementBuilder::new("dt")?.text(term).build())?;
        append_child(&list, &ElementBuilder::new("dd")?.text(value).build())?;
    }
    Ok(list)
}
