// ============================================================================
// DASHBOARD VIEW - Header + pestañas por rol + pantalla seleccionada
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::auth::{Role, User};
use crate::state::AppState;
use crate::viewmodels::navigation::{screen_for, tabs_for, Screen, Tab};
use crate::viewmodels::AppViewModel;
use crate::views::resources::{render_courses, render_departments, render_programs, render_users};

pub fn render_dashboard(vm: &Rc<AppViewModel>, ui: &AppState, user: &User) -> Result<Element, JsValue> {
    let selected = vm.selected_tab();

    let body = ElementBuilder::new("div")?
        .class("dashboard-body")
        .child(render_tabs(vm, user.role, &selected)?)?
        .child(render_screen(vm, ui, user, screen_for(user.role, &selected))?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("dashboard")
        .child(render_header(vm, ui, user)?)?
        .child(body)?
        .build())
}

fn render_header(vm: &Rc<AppViewModel>, ui: &AppState, user: &User) -> Result<Element, JsValue> {
    let logout = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text("Log out")
        .build();
    {
        let vm = vm.clone();
        let ui = ui.clone();
        on_click(&logout, move |_| {
            ui.clear_forms();
            vm.logout();
        })?;
    }

    let identity = ElementBuilder::new("div")?
        .class("user-identity")
        .child(ElementBuilder::new("span")?.class("user-name").text(&user.name).build())?
        .child(ElementBuilder::new("span")?.class("role-badge").text(user.role.label()).build())?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text("LMS Portal").build())?
        .child(identity)?
        .child(logout)?
        .build())
}

fn render_tabs(vm: &Rc<AppViewModel>, role: Role, selected: &str) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("tab-nav").build();
    for tab in tabs_for(role) {
        let class = if tab.id() == selected { "tab active" } else { "tab" };
        let button = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .attr("data-tab", tab.id())?
            .text(tab.label())
            .build();
        let vm = vm.clone();
        let id = tab.id();
        on_click(&button, move |_| vm.select_tab(id))?;
        append_child(&nav, &button)?;
    }
    Ok(nav)
}

fn render_screen(vm: &Rc<AppViewModel>, ui: &AppState, user: &User, screen: Screen) -> Result<Element, JsValue> {
    let content = match screen {
        Screen::Overview(role) => render_overview(user, role)?,
        Screen::Departments => render_departments(vm, ui)?,
        Screen::Programs => render_programs(vm, ui)?,
        Screen::Courses => render_courses(vm, ui)?,
        Screen::Users => render_users(vm, ui)?,
        Screen::Placeholder(tab) => render_placeholder(tab)?,
        Screen::NotFound => ElementBuilder::new("div")?
            .class("empty-state")
            .text("Page not found")
            .build(),
    };
    Ok(ElementBuilder::new("main")?
        .class("dashboard-content")
        .child(content)?
        .build())
}

fn render_overview(user: &User, role: Role) -> Result<Element, JsValue> {
    let summary = match role {
        Role::SuperAdmin => "Manage departments, programs, courses and user accounts for your institute.",
        Role::Teacher => "Build your question bank, schedule exams and follow class analytics.",
        Role::Student => "See your upcoming exams and check your results.",
    };
    let shortcuts = ElementBuilder::new("ul")?.class("overview-shortcuts").build();
    for tab in tabs_for(role).iter().filter(|t| **t != Tab::Dashboard) {
        append_child(&shortcuts, &ElementBuilder::new("li")?.text(tab.label()).build())?;
    }

    Ok(ElementBuilder::new("section")?
        .class("overview")
        .child(ElementBuilder::new("h2")?.text(&format!("Welcome, {}", user.name)).build())?
        .child(ElementBuilder::new("p")?.text(summary).build())?
        .child(shortcuts)?
        .build())
}

fn render_placeholder(tab: Tab) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("empty-state")
        .child(ElementBuilder::new("h2")?.text(tab.label()).build())?
        .child(ElementBuilder::new("p")?.text("This section is not available yet.").build())?
        .build())
}
