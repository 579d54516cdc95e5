use futures::future::LocalBoxFuture;

use crate::models::{ConfirmPrompt, Notification, ProductForm, ProductTable};

/// Mecanismo de popups (SweetAlert2 en el navegador)
pub trait Notifier {
    /// Mostrar un mensaje con título y severidad
    fn notify(&self, notification: Notification);

    /// Diálogo confirmar/cancelar. `true` sólo si el usuario confirma.
    fn confirm(&self, prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool>;
}

/// Destino del renderizado completo de la lista
pub trait ListView {
    fn render(&self, table: &ProductTable);
}

/// Formulario de producto (crear: id vacío / editar: id presente)
pub trait ProductFormView {
    /// Precargar el formulario con los valores de una fila
    fn fill(&self, values: &ProductForm);

    /// Vaciar el formulario, incluido el id oculto
    fn reset(&self);
}
