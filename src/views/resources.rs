// ============================================================================
// RESOURCE VIEWS - Listado + formulario de alta por recurso de gestión
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::academic::{Course, Department, Program, Resource};
use crate::models::auth::{Role, User};
use crate::state::{AppState, FormState};
use crate::viewmodels::{AppViewModel, ListState, ResourceViewModel};
use crate::views::forms::{error_banner, select_field, submit_button, text_field};

/// Lanza la primera carga de un recurso sin bloquear el render
fn ensure_loaded<R, F>(vm: &Rc<AppViewModel>, pick: F)
where
    R: Resource,
    F: Fn(&AppViewModel) -> &ResourceViewModel<R> + 'static,
{
    let vm = vm.clone();
    spawn_local(async move {
        pick(&*vm).load_once().await;
    });
}

/// Envío genérico: begin -> create -> reset o error inline
fn submit_draft<R, F>(vm: &Rc<AppViewModel>, form: &FormState<R::Draft>, pick: F)
where
    R: Resource,
    R::Draft: Clone + Default,
    F: Fn(&AppViewModel) -> &ResourceViewModel<R> + 'static,
{
    if !form.begin() {
        return;
    }
    crate::rerender_app();

    let vm = vm.clone();
    let form = form.clone();
    spawn_local(async move {
        let draft = form.snapshot();
        match pick(&*vm).create(&draft).await {
            Ok(_) => form.reset(R::Draft::default()),
            Err(message) => form.finish(Err(message)),
        }
        crate::rerender_app();
    });
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?.build();
    for header in headers {
        append_child(&head_row, &ElementBuilder::new("th")?.text(header).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();

    let tbody = ElementBuilder::new("tbody")?.build();
    for row in rows {
        let tr = ElementBuilder::new("tr")?.build();
        for cell in row {
            append_child(&tr, &ElementBuilder::new("td")?.text(&cell).build())?;
        }
        append_child(&tbody, &tr)?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table")
        .child(thead)?
        .child(tbody)?
        .build())
}

/// Sección de listado: carga, error o tabla
fn list_section<R>(
    title: &str,
    state: &ListState<R>,
    headers: &[&str],
    row: impl Fn(&R) -> Vec<String>,
) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("resource-list")
        .child(ElementBuilder::new("h2")?.text(title).build())?
        .build();

    if state.loading {
        append_child(&section, &ElementBuilder::new("p")?.class("muted").text("Loading...").build())?;
    } else if let Some(error) = &state.error {
        append_child(&section, &ElementBuilder::new("div")?.class("form-error").text(error).build())?;
    } else if state.items.is_empty() {
        append_child(&section, &ElementBuilder::new("p")?.class("muted").text("Nothing here yet").build())?;
    } else {
        append_child(&section, &table(headers, state.items.iter().map(row).collect())?)?;
    }
    Ok(section)
}

fn create_form(title: &str, error: Option<String>, fields: Vec<Element>, busy: bool) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("resource-form")
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .build();
    if let Some(banner) = error_banner(error.as_deref())? {
        append_child(&form, &banner)?;
    }
    for field in fields {
        append_child(&form, &field)?;
    }
    append_child(&form, &submit_button("Create", "Creating...", busy)?)?;
    Ok(form)
}

fn screen(list: Element, form: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("resource-screen")
        .child(form)?
        .child(list)?
        .build())
}

fn options<R>(items: &[R], label: impl Fn(&R) -> String) -> Vec<(String, String)>
where
    R: Resource,
{
    items.iter().map(|r| (r.id().to_string(), label(r))).collect()
}

// ============================================================================
// DEPARTMENTS
// ============================================================================

pub fn render_departments(vm: &Rc<AppViewModel>, ui: &AppState) -> Result<Element, JsValue> {
    ensure_loaded::<Department, _>(vm, |vm| &vm.departments);
    let state = vm.departments.snapshot();
    let draft = ui.department.snapshot();

    let fields = {
        let (name_form, code_form) = (ui.department.clone(), ui.department.clone());
        vec![
            text_field("dept_name", "Name", "text", &draft.name, move |v| name_form.edit(|d| d.name = v))?,
            text_field("dept_code", "Code", "text", &draft.code, move |v| code_form.edit(|d| d.code = v))?,
        ]
    };
    let form = create_form("New department", ui.department.error(), fields, ui.department.is_busy())?;
    {
        let vm = vm.clone();
        let draft_form = ui.department.clone();
        on_submit(&form, move || submit_draft::<Department, _>(&vm, &draft_form, |vm| &vm.departments))?;
    }

    let list = list_section("Departments", &state, &["Code", "Name"], |d: &Department| {
        vec![d.code.clone(), d.name.clone()]
    })?;
    screen(list, form)
}

// ============================================================================
// PROGRAMS
// ============================================================================

pub fn render_programs(vm: &Rc<AppViewModel>, ui: &AppState) -> Result<Element, JsValue> {
    ensure_loaded::<Program, _>(vm, |vm| &vm.programs);
    ensure_loaded::<Department, _>(vm, |vm| &vm.departments);
    let state = vm.programs.snapshot();
    let departments = vm.departments.snapshot().items;
    let draft = ui.program.snapshot();

    let fields = {
        let (dept_form, name_form, code_form) = (ui.program.clone(), ui.program.clone(), ui.program.clone());
        vec![
            select_field(
                "program_dept",
                "Department",
                Some("Select a department"),
                &options(&departments, |d: &Department| format!("{} ({})", d.name, d.code)),
                &draft.dept_id,
                move |v| dept_form.edit(|p| p.dept_id = v),
            )?,
            text_field("program_name", "Name", "text", &draft.name, move |v| name_form.edit(|p| p.name = v))?,
            text_field("program_code", "Code", "text", &draft.code, move |v| code_form.edit(|p| p.code = v))?,
        ]
    };
    let form = create_form("New program", ui.program.error(), fields, ui.program.is_busy())?;
    {
        let vm = vm.clone();
        let draft_form = ui.program.clone();
        on_submit(&form, move || submit_draft::<Program, _>(&vm, &draft_form, |vm| &vm.programs))?;
    }

    let list = list_section("Programs", &state, &["Code", "Name", "Department"], |p: &Program| {
        let department = departments
            .iter()
            .find(|d| d.id == p.dept_id)
            .map(|d| d.code.clone())
            .unwrap_or_else(|| p.dept_id.clone());
        vec![p.code.clone(), p.name.clone(), department]
    })?;
    screen(list, form)
}

// ============================================================================
// COURSES
// ============================================================================

pub fn render_courses(vm: &Rc<AppViewModel>, ui: &AppState) -> Result<Element, JsValue> {
    ensure_loaded::<Course, _>(vm, |vm| &vm.courses);
    ensure_loaded::<Program, _>(vm, |vm| &vm.programs);
    let state = vm.courses.snapshot();
    let programs = vm.programs.snapshot().items;
    let draft = ui.course.snapshot();

    let fields = {
        let program_form = ui.course.clone();
        let name_form = ui.course.clone();
        let code_form = ui.course.clone();
        let semester_form = ui.course.clone();
        let batch_form = ui.course.clone();
        vec![
            select_field(
                "course_program",
                "Program",
                Some("Select a program"),
                &options(&programs, |p: &Program| format!("{} ({})", p.name, p.code)),
                &draft.program_id,
                move |v| program_form.edit(|c| c.program_id = v),
            )?,
            text_field("course_name", "Name", "text", &draft.name, move |v| name_form.edit(|c| c.name = v))?,
            text_field("course_code", "Code", "text", &draft.code, move |v| code_form.edit(|c| c.code = v))?,
            text_field("course_semester", "Semester", "number", &draft.semester.to_string(), move |v| {
                // valor no numérico -> 0, lo rechaza la validación
                semester_form.edit(|c| c.semester = v.trim().parse().unwrap_or(0))
            })?,
            text_field("course_batch", "Batch year", "number", &draft.batch_year.to_string(), move |v| {
                batch_form.edit(|c| c.batch_year = v.trim().parse().unwrap_or(0))
            })?,
        ]
    };
    let form = create_form("New course", ui.course.error(), fields, ui.course.is_busy())?;
    {
        let vm = vm.clone();
        let draft_form = ui.course.clone();
        on_submit(&form, move || submit_draft::<Course, _>(&vm, &draft_form, |vm| &vm.courses))?;
    }

    let list = list_section("Courses", &state, &["Code", "Name", "Semester", "Batch"], |c: &Course| {
        vec![c.code.clone(), c.name.clone(), c.semester.to_string(), c.batch_year.to_string()]
    })?;
    screen(list, form)
}

// ============================================================================
// USERS
// ============================================================================

pub fn render_users(vm: &Rc<AppViewModel>, ui: &AppState) -> Result<Element, JsValue> {
    ensure_loaded::<User, _>(vm, |vm| &vm.users);
    ensure_loaded::<Department, _>(vm, |vm| &vm.departments);
    let state = vm.users.snapshot();
    let departments = vm.departments.snapshot().items;
    let draft = ui.user.snapshot();

    let roles: Vec<(String, String)> = [Role::SuperAdmin, Role::Teacher, Role::Student]
        .into_iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect();

    let fields = {
        let name_form = ui.user.clone();
        let email_form = ui.user.clone();
        let password_form = ui.user.clone();
        let role_form = ui.user.clone();
        let phone_form = ui.user.clone();
        let dept_form = ui.user.clone();
        vec![
            text_field("user_name", "Name", "text", &draft.name, move |v| name_form.edit(|u| u.name = v))?,
            text_field("user_email", "Email", "email", &draft.email, move |v| email_form.edit(|u| u.email = v))?,
            text_field("user_password", "Password", "password", &draft.password, move |v| {
                password_form.edit(|u| u.password = v)
            })?,
            select_field("user_role", "Role", None, &roles, draft.role.as_str(), move |v| {
                if let Some(role) = Role::parse(&v) {
                    role_form.edit(|u| u.role = role)
                }
            })?,
            text_field(
                "user_phone",
                "Phone (optional)",
                "tel",
                draft.phone.as_deref().unwrap_or_default(),
                move |v| phone_form.edit(|u| u.phone = non_blank(v)),
            )?,
            select_field(
                "user_dept",
                "Department (optional)",
                Some("No department"),
                &options(&departments, |d: &Department| d.name.clone()),
                draft.dept_id.as_deref().unwrap_or_default(),
                move |v| dept_form.edit(|u| u.dept_id = non_blank(v)),
            )?,
        ]
    };
    let form = create_form("New user", ui.user.error(), fields, ui.user.is_busy())?;
    {
        let vm = vm.clone();
        let draft_form = ui.user.clone();
        on_submit(&form, move || submit_draft::<User, _>(&vm, &draft_form, |vm| &vm.users))?;
    }

    let list = list_section("Users", &state, &["Name", "Email", "Role", "Status"], |u: &User| {
        vec![
            u.name.clone(),
            u.email.clone(),
            u.role.label().to_string(),
            u.status.clone().unwrap_or_default(),
        ]
    })?;
    screen(list, form)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
