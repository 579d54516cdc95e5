// ============================================================================
// APP - Cableado de colaboradores del navegador + listeners de la página
// ============================================================================
// El HTML ya existe (authForm, productForm, produktyList). Aquí sólo se
// enganchan eventos y se arranca el primer refresh de la lista.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{on_click, on_submit, require_element, submitter_id};
use crate::services::ApiClient;
use crate::utils::{LocalTokenStorage, AUTH_FORM_ID, LOGOUT_BUTTON_ID, PRODUCT_FORM_ID};
use crate::viewmodels::AdminViewModels;
use crate::views::{
    apply_auth_affordances, read_credentials, AuthIntent, DomProductForm, ProductTableView, RowAction,
    SwalNotifier,
};

/// Aplicación principal
pub struct App {
    vm: AdminViewModels,
    table: ProductTableView,
}

impl App {
    /// Crear la aplicación con fetch, localStorage y SweetAlert2 reales
    pub fn new() -> Result<Self, JsValue> {
        let table = ProductTableView::new();
        let vm = AdminViewModels::new(
            ApiClient::browser(),
            Rc::new(LocalTokenStorage),
            Rc::new(SwalNotifier),
            Rc::new(table.clone()),
            Rc::new(DomProductForm),
        );

        let products = vm.products.clone();
        table.set_row_handler(move |action| match action {
            RowAction::Edit(values) => {
                let _ = products.edit(&values);
            }
            RowAction::Delete(id) => {
                let products = products.clone();
                spawn_local(async move {
                    let _ = products.remove(id).await;
                });
            }
        });

        Ok(Self { vm, table })
    }

    /// Enganchar listeners y pintar el estado inicial
    pub fn init(&self) -> Result<(), JsValue> {
        self.bind_auth_form()?;
        self.bind_logout()?;
        self.bind_product_form()?;
        self.table.bind()?;

        self.vm.session.subscribe(|status| apply_auth_affordances(*status));
        apply_auth_affordances(self.vm.session.status());

        let list = self.vm.list.clone();
        spawn_local(async move {
            let _ = list.refresh().await;
        });

        log::info!("✅ [APP] Inicializada ({:?})", self.vm.session.status());
        Ok(())
    }

    fn bind_auth_form(&self) -> Result<(), JsValue> {
        let form = require_element(AUTH_FORM_ID)?;
        let auth = self.vm.auth.clone();
        on_submit(&form, move |event| {
            let intent = AuthIntent::from_submitter(submitter_id(&event).as_deref());
            let credentials = read_credentials();
            let auth = auth.clone();
            spawn_local(async move {
                let _ = match intent {
                    AuthIntent::Login => auth.login(credentials).await,
                    AuthIntent::Register => auth.register(credentials).await,
                };
            });
        })
    }

    fn bind_logout(&self) -> Result<(), JsValue> {
        let button = require_element(LOGOUT_BUTTON_ID)?;
        let auth = self.vm.auth.clone();
        on_click(&button, move |_| auth.logout())
    }

    fn bind_product_form(&self) -> Result<(), JsValue> {
        let form = require_element(PRODUCT_FORM_ID)?;
        let products = self.vm.products.clone();
        on_submit(&form, move |_| {
            let values = DomProductForm.read();
            let products = products.clone();
            spawn_local(async move {
                let _ = products.save(values).await;
            });
        })
    }
}
