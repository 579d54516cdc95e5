// ============================================================================
// LIST VIEWMODEL - Re-fetch + re-render completo de la lista
// ============================================================================
// Único punto de reconciliación vista/estado: nada de diff incremental.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AppError;
use crate::models::ProductTable;
use crate::services::ProductService;
use crate::viewmodels::error_presenter::ErrorPresenter;
use crate::views::traits::ListView;

#[derive(Clone)]
pub struct ListViewModel {
    service: ProductService,
    view: Rc<dyn ListView>,
    presenter: ErrorPresenter,
    rendered: Rc<RefCell<ProductTable>>,
}

impl ListViewModel {
    pub fn new(service: ProductService, view: Rc<dyn ListView>, presenter: ErrorPresenter) -> Self {
        Self {
            service,
            view,
            presenter,
            rendered: Rc::new(RefCell::new(ProductTable::default())),
        }
    }

    /// GET completo y reconstrucción de todas las filas.
    /// Si falla, las filas actuales se quedan como están.
    pub async fn refresh(&self) -> Result<ProductTable, AppError> {
        log::debug!("🔄 [LISTA] Refrescando productos...");
        match self.service.list().await {
            Ok(products) => {
                let table = ProductTable::from_products(&products);
                self.view.render(&table);
                *self.rendered.borrow_mut() = table.clone();
                log::info!("✅ [LISTA] {} productos renderizados", products.len());
                Ok(table)
            }
            Err(e) => {
                log::error!("❌ [LISTA] Error cargando productos: {}", e);
                self.presenter.report(&e);
                Err(e)
            }
        }
    }

    /// Última tabla renderizada con éxito
    pub fn rendered(&self) -> ProductTable {
        self.rendered.borrow().clone()
    }
}
