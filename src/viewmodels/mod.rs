// ============================================================================
// VIEWMODELS - Estado + lógica de UI (sin DOM)
// ============================================================================

pub mod error_presenter;
pub mod list_viewmodel;
pub mod auth_viewmodel;
pub mod product_viewmodel;

use std::rc::Rc;

pub use auth_viewmodel::AuthViewModel;
pub use error_presenter::{normalize, ErrorPresenter, PresentedError};
pub use list_viewmodel::ListViewModel;
pub use product_viewmodel::ProductViewModel;

use crate::services::{ApiClient, AuthService, ProductService};
use crate::state::{InFlight, SessionState};
use crate::utils::TokenStorage;
use crate::views::traits::{ListView, Notifier, ProductFormView};

/// Resultado de una acción de usuario que no falló
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    Skipped(SkipReason),
}

/// Por qué una acción terminó sin hacer nada
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Ya había una request del mismo tipo en curso
    InFlight,
    /// El usuario canceló la confirmación
    Declined,
    /// Login/registro pedidos con una sesión ya abierta
    AlreadyAuthenticated,
}

/// Todos los viewmodels cableados sobre los mismos colaboradores
#[derive(Clone)]
pub struct AdminViewModels {
    pub session: SessionState,
    pub auth: AuthViewModel,
    pub products: ProductViewModel,
    pub list: ListViewModel,
}

impl AdminViewModels {
    pub fn new(
        api: ApiClient,
        storage: Rc<dyn TokenStorage>,
        notifier: Rc<dyn Notifier>,
        list_view: Rc<dyn ListView>,
        form_view: Rc<dyn ProductFormView>,
    ) -> Self {
        let session = SessionState::load(storage);
        let presenter = ErrorPresenter::new(notifier);
        let in_flight = InFlight::new();
        let product_service = ProductService::new(api.clone());

        let list = ListViewModel::new(product_service.clone(), list_view, presenter.clone());
        let auth = AuthViewModel::new(
            AuthService::new(api),
            session.clone(),
            list.clone(),
            presenter.clone(),
            in_flight.clone(),
        );
        let products = ProductViewModel::new(
            product_service,
            session.clone(),
            list.clone(),
            form_view,
            presenter,
            in_flight,
        );

        Self {
            session,
            auth,
            products,
            list,
        }
    }
}
