// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners se registran sobre elementos que se destruyen en cada
// re-render completo; el navegador los libera junto con el elemento, así que
// closure.forget() no acumula memoria.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::field_value;

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de <form> con preventDefault ya aplicado
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Cambios de valor de <input>/<select>; el handler recibe el valor nuevo
pub fn on_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let target = element.clone();
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        if let Some(value) = field_value(&target) {
            handler(value);
        }
    }) as Box<dyn FnMut(Event)>);
    let event = if element.tag_name().eq_ignore_ascii_case("select") {
        "change"
    } else {
        "input"
    };
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
