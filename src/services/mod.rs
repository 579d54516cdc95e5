pub mod api_client;
pub mod auth_service;
pub mod product_service;

pub use api_client::{ApiClient, GlooTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use auth_service::AuthService;
pub use product_service::ProductService;
