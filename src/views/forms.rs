// ============================================================================
// FORM HELPERS - Grupos de formulario compartidos por todas las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_value, ElementBuilder};

/// label + input; `on_change` recibe cada pulsación
pub fn text_field<F>(
    id: &str,
    label_text: &str,
    input_type: &str,
    value: &str,
    on_change: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    on_value(&input, on_change)?;

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input)?
        .build())
}

/// label + select. `options` son pares (valor, texto).
pub fn select_field<F>(
    id: &str,
    label_text: &str,
    placeholder: Option<&str>,
    options: &[(String, String)],
    selected: &str,
    on_change: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id(id)?
        .attr("name", id)?
        .build();

    if let Some(text) = placeholder {
        let option = ElementBuilder::new("option")?
            .attr("value", "")?
            .flag("selected", selected.is_empty())?
            .text(text)
            .build();
        select.append_child(&option)?;
    }
    for (value, text) in options {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .flag("selected", value == selected)?
            .text(text)
            .build();
        select.append_child(&option)?;
    }
    on_value(&select, on_change)?;

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(select)?
        .build())
}

/// Mensaje de error inline (nada si no hay error)
pub fn error_banner(message: Option<&str>) -> Result<Option<Element>, JsValue> {
    match message {
        Some(text) => Ok(Some(
            ElementBuilder::new("div")?
                .class("form-error")
                .attr("role", "alert")?
                .text(text)
                .build(),
        )),
        None => Ok(None),
    }
}

pub fn submit_button(label: &str, busy_label: &str, busy: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .flag("disabled", busy)?
        .text(if busy { busy_label } else { label })
        .build())
}

/// Pantalla de carga genérica (gate y guard pendientes)
pub fn loading_screen(message: &str) -> Result<Element, JsValue> {
    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let text = ElementBuilder::new("p")?.text(message).build();
    Ok(ElementBuilder::new("div")?
        .class("loading-screen")
        .child(spinner)?
        .child(text)?
        .build())
}
