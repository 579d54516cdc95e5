// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. La interpretación de
// los status vive en auth_service / product_service.
// Cada request lleva un deadline; al vencer se aborta con AbortController.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use futures::future::{select, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::{AbortController, AbortSignal};

use crate::config::{AppConfig, CONFIG};
use crate::error::TransportError;
use crate::models::{Credentials, ProductPayload};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Se envía como `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body como JSON sin tipo. Un body vacío o no-JSON se convierte en `Null`
    /// (el presenter sabe tratarlo).
    pub fn payload(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Transporte HTTP. Devuelve un future local ('static) para poder usarse
/// detrás de `Rc<dyn Transport>` en un contexto de un solo hilo.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;
}

/// Transporte real del navegador (fetch vía gloo-net)
#[derive(Clone, Debug)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Transport for GlooTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        let timeout_ms = self.timeout_ms;
        async move { send_with_deadline(request, timeout_ms).await }.boxed_local()
    }
}

async fn send_with_deadline(request: HttpRequest, timeout_ms: u32) -> Result<HttpResponse, TransportError> {
    let controller = AbortController::new()
        .map_err(|_| TransportError::Build("AbortController no disponible".to_string()))?;
    let signal = controller.signal();

    let fetch = Box::pin(fetch(request, signal));
    let deadline = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(fetch, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right((_, _pending)) => {
            // Cancelar la request pendiente en el navegador
            controller.abort();
            log::warn!("⏱️ [API] Request abortada tras {} ms", timeout_ms);
            Err(TransportError::Timeout(timeout_ms))
        }
    }
}

async fn fetch(request: HttpRequest, signal: AbortSignal) -> Result<HttpResponse, TransportError> {
    let builder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
        HttpMethod::Put => Request::put(&request.url),
        HttpMethod::Delete => Request::delete(&request.url),
    };

    let mut builder = builder.abort_signal(Some(&signal));
    if let Some(token) = request.bearer.as_deref() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let prepared = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Build(e.to_string()))?;

    let response = prepared
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(HttpResponse { status, body })
}

/// Cliente API - endpoints del backend
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, config: AppConfig) -> Self {
        Self { transport, config }
    }

    /// Cliente con fetch real y la configuración de compilación
    pub fn browser() -> Self {
        let config = CONFIG.clone();
        let transport = GlooTransport::new(config.request_timeout_ms());
        Self::new(Rc::new(transport), config)
    }

    /// POST /login
    pub async fn post_login(&self, credentials: &Credentials) -> Result<HttpResponse, TransportError> {
        let url = self.config.login_url();
        self.send(HttpMethod::Post, url, None, Some(to_body(credentials)?)).await
    }

    /// POST /register
    pub async fn post_register(&self, credentials: &Credentials) -> Result<HttpResponse, TransportError> {
        let url = self.config.register_url();
        self.send(HttpMethod::Post, url, None, Some(to_body(credentials)?)).await
    }

    /// GET /produkty (sin token)
    pub async fn get_products(&self) -> Result<HttpResponse, TransportError> {
        let url = self.config.products_url();
        self.send(HttpMethod::Get, url, None, None).await
    }

    /// POST /produkty
    pub async fn post_product(&self, token: &str, payload: &ProductPayload) -> Result<HttpResponse, TransportError> {
        let url = self.config.products_url();
        self.send(HttpMethod::Post, url, Some(token), Some(to_body(payload)?)).await
    }

    /// PUT /produkty/{id}
    pub async fn put_product(
        &self,
        token: &str,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<HttpResponse, TransportError> {
        let url = self.config.product_url(id);
        self.send(HttpMethod::Put, url, Some(token), Some(to_body(payload)?)).await
    }

    /// DELETE /produkty/{id}
    pub async fn delete_product(&self, token: &str, id: i64) -> Result<HttpResponse, TransportError> {
        let url = self.config.product_url(id);
        self.send(HttpMethod::Delete, url, Some(token), None).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        url: String,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> Result<HttpResponse, TransportError> {
        log::debug!("🌐 [API] {} {}", method, url);
        let request = HttpRequest {
            method,
            url,
            bearer: bearer.map(str::to_string),
            body,
        };
        let result = self.transport.send(request).await;
        match &result {
            Ok(response) => log::debug!("📨 [API] {} -> HTTP {}", method, response.status),
            Err(e) => log::error!("❌ [API] {} falló: {}", method, e),
        }
        result
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, TransportError> {
    serde_json::to_value(value).map_err(|e| TransportError::Build(format!("Serialization error: {}", e)))
}
