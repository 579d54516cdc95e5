// ============================================================================
// PRODUCT SERVICE - CRUD sobre /produkty (sin estado)
// ============================================================================
// Reglas de status: list exige 200, create/update aceptan [200,300),
// delete exige exactamente 200. Todo lo demás es BackendRejected.
// ============================================================================

use crate::error::AppError;
use crate::models::{Product, ProductPayload};
use crate::services::api_client::ApiClient;
use crate::services::auth_service::rejected;

#[derive(Clone)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        let response = self.api.get_products().await?;
        if response.status != 200 {
            return Err(rejected(&response));
        }
        response.json::<Vec<Product>>().map_err(|e| {
            log::error!("❌ [PRODUKTY] Lista ilegible: {}", e);
            rejected(&response)
        })
    }

    /// Crea el producto. Devuelve la entidad si el backend la incluye en el body.
    pub async fn create(&self, token: &str, payload: &ProductPayload) -> Result<Option<Product>, AppError> {
        let response = self.api.post_product(token, payload).await?;
        if !response.is_success() {
            return Err(rejected(&response));
        }
        Ok(response.json::<Product>().ok())
    }

    pub async fn update(
        &self,
        token: &str,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, AppError> {
        let response = self.api.put_product(token, id, payload).await?;
        if !response.is_success() {
            return Err(rejected(&response));
        }
        Ok(response.json::<Product>().ok())
    }

    pub async fn delete(&self, token: &str, id: i64) -> Result<(), AppError> {
        let response = self.api.delete_product(token, id).await?;
        if response.status != 200 {
            return Err(rejected(&response));
        }
        Ok(())
    }
}
