pub mod product;
pub mod auth;
pub mod notification;
pub mod table;
pub mod validation;

pub use product::{Product, ProductForm, ProductPayload};
pub use auth::{Credentials, LoginResponse};
pub use notification::{ConfirmPrompt, Notification, Severity};
pub use table::{ProductRow, ProductTable, TableRow};
pub use validation::{validate_credentials, validate_product, ValidatedProduct};
