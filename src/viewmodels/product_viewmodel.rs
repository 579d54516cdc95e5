// ============================================================================
// PRODUCT VIEWMODEL - CRUD de productos con gate de token
// ============================================================================
// Orden de cada mutación:
//   token? → in-flight → validación local → red → reset/notificación/refresh
// Cualquier fallo va al presenter y la lista no se refresca.
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::{validate_product, ConfirmPrompt, Notification, Product, ProductForm, ProductPayload};
use crate::services::ProductService;
use crate::state::{Action, InFlight, SessionState};
use crate::utils::{CONFIRM_DELETE_TITLE, MSG_PRODUCT_DELETED, MSG_PRODUCT_SAVED, TITLE_DELETED, TITLE_SUCCESS};
use crate::viewmodels::error_presenter::ErrorPresenter;
use crate::viewmodels::list_viewmodel::ListViewModel;
use crate::viewmodels::{Outcome, SkipReason};
use crate::views::traits::ProductFormView;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Clone)]
pub struct ProductViewModel {
    service: ProductService,
    session: SessionState,
    list: ListViewModel,
    form: Rc<dyn ProductFormView>,
    presenter: ErrorPresenter,
    in_flight: InFlight,
    today: fn() -> NaiveDate,
}

impl ProductViewModel {
    pub fn new(
        service: ProductService,
        session: SessionState,
        list: ListViewModel,
        form: Rc<dyn ProductFormView>,
        presenter: ErrorPresenter,
        in_flight: InFlight,
    ) -> Self {
        Self {
            service,
            session,
            list,
            form,
            presenter,
            in_flight,
            today: local_today,
        }
    }

    /// Reloj para la validación de fecha (los tests fijan el día)
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Lectura sin token
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.service.list().await.map_err(|e| self.fail(e))
    }

    /// Submit del formulario: id vacío → create, si no → update(id)
    pub async fn save(&self, form: ProductForm) -> Result<Outcome<Option<Product>>, AppError> {
        let token = self.require_token()?;
        let Some(_ticket) = self.in_flight.try_begin(Action::SaveProduct) else {
            return Ok(Outcome::Skipped(SkipReason::InFlight));
        };

        let validated = validate_product(&form, (self.today)())
            .map_err(|issues| self.fail(AppError::ValidationFailed(issues)))?;

        let saved = match validated.id {
            Some(id) => {
                log::info!("✏️ [PRODUKTY] Actualizando producto {}", id);
                self.service.update(&token, id, &validated.payload).await
            }
            None => {
                log::info!("➕ [PRODUKTY] Creando producto: {}", validated.payload.nazwa);
                self.service.create(&token, &validated.payload).await
            }
        }
        .map_err(|e| self.fail(e))?;

        self.form.reset();
        self.presenter
            .notifier()
            .notify(Notification::success(TITLE_SUCCESS, MSG_PRODUCT_SAVED));
        // Un fallo de la lista se muestra dentro de refresh(), tras el éxito
        let _ = self.list.refresh().await;
        Ok(Outcome::Done(saved))
    }

    /// POST con un payload ya validado
    pub async fn create(&self, payload: &ProductPayload) -> Result<Outcome<Option<Product>>, AppError> {
        self.save(form_for(None, payload)).await
    }

    /// PUT con un payload ya validado
    pub async fn update(&self, id: i64, payload: &ProductPayload) -> Result<Outcome<Option<Product>>, AppError> {
        self.save(form_for(Some(id), payload)).await
    }

    /// DELETE tras confirmación explícita
    pub async fn remove(&self, id: i64) -> Result<Outcome<()>, AppError> {
        let token = self.require_token()?;
        let Some(_ticket) = self.in_flight.try_begin(Action::DeleteProduct) else {
            return Ok(Outcome::Skipped(SkipReason::InFlight));
        };

        let confirmed = self
            .presenter
            .notifier()
            .confirm(ConfirmPrompt::new(CONFIRM_DELETE_TITLE))
            .await;
        if !confirmed {
            log::debug!("🚫 [PRODUKTY] Borrado de {} cancelado", id);
            return Ok(Outcome::Skipped(SkipReason::Declined));
        }

        log::info!("🗑️ [PRODUKTY] Eliminando producto {}", id);
        self.service.delete(&token, id).await.map_err(|e| self.fail(e))?;

        self.presenter
            .notifier()
            .notify(Notification::success(TITLE_DELETED, MSG_PRODUCT_DELETED));
        let _ = self.list.refresh().await;
        Ok(Outcome::Done(()))
    }

    /// Precargar el formulario con los valores de una fila
    pub fn edit(&self, values: &ProductForm) -> Result<(), AppError> {
        self.require_token()?;
        self.form.fill(values);
        Ok(())
    }

    fn require_token(&self) -> Result<String, AppError> {
        self.session
            .get()
            .ok_or_else(|| self.fail(AppError::Unauthenticated))
    }

    fn fail(&self, error: AppError) -> AppError {
        log::warn!("⚠️ [PRODUKTY] {}", error);
        self.presenter.report(&error);
        error
    }
}

fn form_for(id: Option<i64>, payload: &ProductPayload) -> ProductForm {
    ProductForm {
        id: id.map(|id| id.to_string()).unwrap_or_default(),
        nazwa: payload.nazwa.clone(),
        cena: payload.cena.to_string(),
        kategoria: payload.kategoria.clone(),
        ilosc: payload.ilosc.to_string(),
        producent: payload.producent.clone().unwrap_or_default(),
        data_dodania: payload
            .data_dodania
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    }
}
