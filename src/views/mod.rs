// ============================================================================
// VIEWS - Implementaciones de navegador de los traits de vista
// ============================================================================

pub mod traits;
pub mod popup;
pub mod product_table;
pub mod product_form;
pub mod auth_panel;

pub use traits::{ListView, Notifier, ProductFormView};
pub use popup::SwalNotifier;
pub use product_table::{ProductTableView, RowAction};
pub use product_form::DomProductForm;
pub use auth_panel::{apply_auth_affordances, read_credentials, AuthIntent};
