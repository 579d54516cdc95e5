// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================
// Los datos del backend se insertan siempre con textContent, nunca innerHTML.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento por ID o error con el id que falta
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un contenedor
pub fn clear_children(element: &Element) {
    element.set_text_content(None);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Input por ID
pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Valor actual de un input (vacío si no existe)
pub fn input_value(id: &str) -> String {
    input_by_id(id).map(|input| input.value()).unwrap_or_default()
}

/// Escribir el valor de un input
pub fn set_input_value(id: &str, value: &str) {
    match input_by_id(id) {
        Some(input) => input.set_value(value),
        None => log::warn!("⚠️ [DOM] Input #{} no encontrado", id),
    }
}

/// Habilitar / deshabilitar un botón
pub fn set_button_disabled(id: &str, disabled: bool) {
    if let Some(button) = get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlButtonElement>().ok()) {
        button.set_disabled(disabled);
    }
}

/// Valor inline de `display` (explícito también al mostrar)
pub fn display_value(visible: bool) -> &'static str {
    if visible {
        "inline-block"
    } else {
        "none"
    }
}

/// Mostrar / ocultar vía style.display
pub fn set_visible(id: &str, visible: bool) {
    if let Some(element) = get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
        let _ = element.style().set_property("display", display_value(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_elements_get_an_explicit_display() {
        assert_eq!(display_value(true), "inline-block");
        assert_eq!(display_value(false), "none");
    }
}
