// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores vienen de variables de entorno (o del .env vía build.rs).
// Las rutas del backend son configurables; la semántica de cada endpoint no.
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Origen del backend. Vacío = mismo origen que la página.
    pub backend_url: String,
    pub login_path: String,
    pub register_path: String,
    pub products_path: String,
    pub request_timeout_seconds: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            login_path: "/login".to_string(),
            register_path: "/register".to_string(),
            products_path: "/produkty".to_string(),
            request_timeout_seconds: 15,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            login_path: option_env!("LOGIN_PATH")
                .map(normalize_path)
                .unwrap_or(defaults.login_path),
            register_path: option_env!("REGISTER_PATH")
                .map(normalize_path)
                .unwrap_or(defaults.register_path),
            products_path: option_env!("PRODUCTS_PATH")
                .map(normalize_path)
                .unwrap_or(defaults.products_path),
            request_timeout_seconds: option_env!("REQUEST_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.request_timeout_seconds),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.backend_url, self.login_path)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.backend_url, self.register_path)
    }

    pub fn products_url(&self) -> String {
        format!("{}{}", self.backend_url, self.products_path)
    }

    /// URL de un producto concreto (`/produkty/{id}`)
    pub fn product_url(&self, id: i64) -> String {
        format!("{}/{}", self.products_url(), id)
    }

    /// Deadline por request en milisegundos
    pub fn request_timeout_ms(&self) -> u32 {
        self.request_timeout_seconds.saturating_mul(1000)
    }

    /// Nivel de log según ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
