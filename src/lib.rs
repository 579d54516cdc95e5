// ============================================================================
// PRODUKTY ADMIN - Cliente WASM del panel de productos (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: traits + implementaciones DOM (sin lógica)
// - ViewModels: auth, productos, lista, presentador de errores
// - Services: SOLO comunicación API
// - State: token de sesión + flags in-flight con Rc<RefCell>
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;
mod dom;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global: mantiene vivos los viewmodels que usan los listeners
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Produkty Admin - Rust Puro + MVVM");
    log::debug!("⚙️ [CONFIG] {:?}", *CONFIG);

    let app = App::new()?;
    app.init()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}
