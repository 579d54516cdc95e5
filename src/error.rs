// ============================================================================
// ERRORES - Taxonomía de fallos de una acción de usuario
// ============================================================================
// Todo error termina en una notificación visible; ninguno se reintenta.
// ============================================================================

use serde_json::Value;
use thiserror::Error;

/// Fallo de transporte (la request no llegó a completarse)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request build error: {0}")]
    Build(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }
}

/// Un problema de validación local, ligado a un campo del formulario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Operación mutante sin token: no se hace ninguna llamada de red
    #[error("Not authenticated")]
    Unauthenticated,

    /// Validación previa fallida: no se hace ninguna llamada de red
    #[error("Validation failed ({} issue(s))", .0.len())]
    ValidationFailed(Vec<ValidationIssue>),

    /// El backend respondió con un status fuera del rango aceptado
    #[error("Backend rejected request with HTTP {status}")]
    BackendRejected { status: u16, payload: Value },

    #[error(transparent)]
    NetworkFailure(#[from] TransportError),
}
