// ============================================================================
// SWEETALERT2 FFI - Wrapper de Swal.fire
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Swal, js_name = fire, catch)]
    fn swal_fire(options: &JsValue) -> Result<Promise, JsValue>;
}

/// ¿Está cargado SweetAlert2 en la página?
pub fn swal_available() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("Swal")).unwrap_or(false))
        .unwrap_or(false)
}

/// Opciones de Swal.fire como objeto JS plano
pub struct SwalOptions {
    object: Object,
}

impl SwalOptions {
    pub fn new() -> Self {
        Self { object: Object::new() }
    }

    pub fn set(self, key: &str, value: impl Into<JsValue>) -> Self {
        let _ = Reflect::set(&self.object, &JsValue::from_str(key), &value.into());
        self
    }
}

/// Abre el popup y espera a que se cierre. Devuelve `isConfirmed`.
pub async fn fire(options: SwalOptions) -> Result<bool, JsValue> {
    let promise = swal_fire(&options.object.into())?;
    let result = JsFuture::from(promise).await?;
    let confirmed = Reflect::get(&result, &JsValue::from_str("isConfirmed"))?;
    Ok(confirmed.as_bool().unwrap_or(false))
}
