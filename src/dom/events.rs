// ============================================================================
// EVENT HANDLING - Listeners con closure.forget()
// ============================================================================
// Todos los listeners se registran UNA VEZ al arrancar: formularios,
// logoutBtn y el click delegado de #produktyList. Las filas no llevan propios.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent, SubmitEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Submit de formulario con preventDefault incluido
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(SubmitEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: SubmitEvent| {
        event.prevent_default();
        handler(event);
    }) as Box<dyn FnMut(SubmitEvent)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Id del botón que disparó el submit (None con Enter sin botón)
pub fn submitter_id(event: &SubmitEvent) -> Option<String> {
    event
        .submitter()
        .map(|submitter| submitter.id())
        .filter(|id| !id.is_empty())
}
