// ============================================================================
// ERROR PRESENTER - Normaliza payloads de error heterogéneos
// ============================================================================
// Frontera anti-crash entre backend y UI: acepta cualquier JSON (o nada) y
// siempre produce un mensaje. Todos los AppError terminan aquí.
// ============================================================================

use std::rc::Rc;

use serde_json::Value;

use crate::error::{AppError, TransportError};
use crate::models::Notification;
use crate::utils::{MSG_MUST_LOG_IN, MSG_NETWORK, MSG_TIMEOUT, MSG_VALIDATION, TITLE_ERROR, TITLE_TIMEOUT};
use crate::views::traits::Notifier;

/// Claves candidatas para el mensaje principal, en orden de preferencia
const MESSAGE_KEYS: [&str; 3] = ["message", "error", "msg"];
const FIELD_ERRORS_KEY: &str = "fieldErrors";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentedError {
    pub title: String,
    pub message: String,
    /// Una línea por error de campo: "<field>: <message> (<code>)"
    pub details: Vec<String>,
}

impl PresentedError {
    pub fn into_notification(self) -> Notification {
        Notification::error(self.title, self.message).with_details(self.details)
    }
}

/// Parte pura: payload → mensaje mostrable
pub fn normalize(payload: &Value) -> PresentedError {
    let message = MESSAGE_KEYS
        .iter()
        .filter_map(|key| payload.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .unwrap_or(TITLE_ERROR)
        .to_string();

    let details = payload
        .get(FIELD_ERRORS_KEY)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(format_field_error).collect())
        .unwrap_or_default();

    PresentedError {
        title: TITLE_ERROR.to_string(),
        message,
        details,
    }
}

fn format_field_error(entry: &Value) -> Option<String> {
    let entry = entry.as_object()?;
    let field = entry.get("field").and_then(Value::as_str).unwrap_or("");
    let message = entry.get("message").and_then(Value::as_str).unwrap_or("");
    let code = match entry.get("code") {
        Some(Value::String(code)) if !code.is_empty() => Some(code.clone()),
        Some(Value::Number(code)) => Some(code.to_string()),
        _ => None,
    };

    Some(match code {
        Some(code) => format!("{}: {} ({})", field, message, code),
        None => format!("{}: {}", field, message),
    })
}

#[derive(Clone)]
pub struct ErrorPresenter {
    notifier: Rc<dyn Notifier>,
}

impl ErrorPresenter {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &Rc<dyn Notifier> {
        &self.notifier
    }

    /// Mostrar un payload de error del backend
    pub fn present(&self, payload: &Value) {
        let presented = normalize(payload);
        log::warn!("⚠️ [ERROR] {} ({} errores de campo)", presented.message, presented.details.len());
        self.notifier.notify(presented.into_notification());
    }

    /// Punto único de salida para cualquier AppError
    pub fn report(&self, error: &AppError) {
        match error {
            AppError::Unauthenticated => {
                self.notifier.notify(Notification::error(TITLE_ERROR, MSG_MUST_LOG_IN));
            }
            AppError::ValidationFailed(issues) => {
                let notification = match issues.as_slice() {
                    [single] => Notification::error(TITLE_ERROR, single.message.clone()),
                    _ => Notification::error(TITLE_ERROR, MSG_VALIDATION)
                        .with_details(issues.iter().map(|i| i.message.clone()).collect()),
                };
                self.notifier.notify(notification);
            }
            AppError::BackendRejected { payload, .. } => self.present(payload),
            AppError::NetworkFailure(TransportError::Timeout(_)) => {
                self.notifier.notify(Notification::warning(TITLE_TIMEOUT, MSG_TIMEOUT));
            }
            AppError::NetworkFailure(_) => {
                self.notifier.notify(Notification::error(TITLE_ERROR, MSG_NETWORK));
            }
        }
    }
}
