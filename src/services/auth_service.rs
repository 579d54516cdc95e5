use crate::error::AppError;
use crate::models::{Credentials, LoginResponse};
use crate::services::api_client::{ApiClient, HttpResponse};

/// Interpretación de las respuestas de /login y /register
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Login: sólo un 200 con `access_token` utilizable cuenta como éxito
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        log::info!("🔐 [AUTH] Login para usuario: {}", credentials.login);
        let response = self.api.post_login(credentials).await?;

        if response.status != 200 {
            return Err(rejected(&response));
        }

        match response.json::<LoginResponse>() {
            Ok(body) => match body.token() {
                Some(token) => Ok(token.to_string()),
                None => {
                    log::warn!("⚠️ [AUTH] HTTP 200 sin access_token");
                    Err(rejected(&response))
                }
            },
            Err(e) => {
                log::warn!("⚠️ [AUTH] Respuesta de login ilegible: {}", e);
                Err(rejected(&response))
            }
        }
    }

    /// Registro: cualquier 2xx es éxito (el backend usa 201, otros 200)
    pub async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        log::info!("📝 [AUTH] Registro de usuario: {}", credentials.login);
        let response = self.api.post_register(credentials).await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(rejected(&response))
        }
    }
}

pub(crate) fn rejected(response: &HttpResponse) -> AppError {
    AppError::BackendRejected {
        status: response.status,
        payload: response.payload(),
    }
}
