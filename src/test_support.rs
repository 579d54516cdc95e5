// ============================================================================
// TEST SUPPORT - Dobles en memoria para tests nativos (sin navegador)
// ============================================================================
// FakeBackend imita los endpoints /login, /register y /produkty; los
// Recording* guardan todo lo que la UI habría mostrado.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use chrono::NaiveDate;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::error::TransportError;
use crate::models::{ConfirmPrompt, Notification, Product, ProductForm, ProductPayload, ProductTable};
use crate::services::{ApiClient, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::utils::{MemoryTokenStorage, TOKEN_STORAGE_KEY};
use crate::viewmodels::AdminViewModels;
use crate::views::traits::{ListView, Notifier, ProductFormView};

// ----------------------------------------------------------------------------
// Backend en memoria
// ----------------------------------------------------------------------------

#[derive(Default)]
struct BackendState {
    users: HashMap<String, String>,
    products: Vec<Product>,
    next_id: i64,
    canned: VecDeque<(u16, Value)>,
    requests: Vec<HttpRequest>,
}

#[derive(Default)]
struct Hold {
    on: bool,
    waiters: Vec<Waker>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<BackendState>>,
    hold: Rc<RefCell<Hold>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, login: &str, password: &str) -> Self {
        self.add_user(login, password);
        self
    }

    pub fn with_product(self, product: Product) -> Self {
        self.insert_product(product);
        self
    }

    pub fn add_user(&self, login: &str, password: &str) {
        self.state
            .borrow_mut()
            .users
            .insert(login.to_string(), password.to_string());
    }

    pub fn insert_product(&self, product: Product) {
        let mut state = self.state.borrow_mut();
        state.next_id = state.next_id.max(product.id);
        state.products.push(product);
    }

    /// La próxima request recibe esta respuesta, sin pasar por las rutas
    pub fn respond_next(&self, status: u16, body: Value) {
        self.state.borrow_mut().canned.push_back((status, body));
    }

    /// Con `true` las respuestas quedan pendientes hasta volver a `false`
    pub fn hold_responses(&self, on: bool) {
        let waiters = {
            let mut hold = self.hold.borrow_mut();
            hold.on = on;
            if on {
                Vec::new()
            } else {
                std::mem::take(&mut hold.waiters)
            }
        };
        waiters.into_iter().for_each(Waker::wake);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(Rc::new(self.clone()), AppConfig::default())
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let mut state = self.state.borrow_mut();
        let (status, body) = match state.canned.pop_front() {
            Some(canned) => canned,
            None => route(&mut state, request),
        };
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }
}

impl Transport for FakeBackend {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        self.state.borrow_mut().requests.push(request.clone());
        let backend = self.clone();
        async move {
            HoldGate {
                hold: backend.hold.clone(),
            }
            .await;
            Ok(backend.handle(&request))
        }
        .boxed_local()
    }
}

struct HoldGate {
    hold: Rc<RefCell<Hold>>,
}

impl Future for HoldGate {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut hold = self.hold.borrow_mut();
        if hold.on {
            hold.waiters.push(cx.waker().clone());
            Poll::Pending
        } else {
            Poll::Ready(())
        }
    }
}

fn route(state: &mut BackendState, request: &HttpRequest) -> (u16, Value) {
    let body = request.body.clone().unwrap_or(Value::Null);
    let product_id = request
        .url
        .strip_prefix("/produkty/")
        .and_then(|id| id.parse::<i64>().ok());

    match (request.method, request.url.as_str()) {
        (HttpMethod::Post, "/login") => {
            let login = body["login"].as_str().unwrap_or_default();
            let password = body["password"].as_str().unwrap_or_default();
            match state.users.get(login) {
                Some(stored) if stored == password => {
                    (200, json!({"access_token": format!("token-{}", login)}))
                }
                _ => (401, json!({"msg": "bad login"})),
            }
        }
        (HttpMethod::Post, "/register") => {
            let login = body["login"].as_str().unwrap_or_default().to_string();
            let password = body["password"].as_str().unwrap_or_default().to_string();
            if state.users.contains_key(&login) {
                (409, json!({"message": "Użytkownik już istnieje"}))
            } else {
                state.users.insert(login, password);
                (201, json!({"message": "Użytkownik zarejestrowany"}))
            }
        }
        (HttpMethod::Get, "/produkty") => (200, json!(state.products)),
        _ if request.method != HttpMethod::Get && request.bearer.is_none() => {
            (401, json!({"msg": "Missing Authorization Header"}))
        }
        (HttpMethod::Post, "/produkty") => match decode_product(state.next_id + 1, body) {
            Some(product) => {
                state.next_id = product.id;
                state.products.push(product.clone());
                (201, json!(product))
            }
            None => (400, json!({"error": "Niepoprawne dane"})),
        },
        (HttpMethod::Put, _) if product_id.is_some() => {
            let id = product_id.unwrap_or_default();
            let Some(index) = state.products.iter().position(|p| p.id == id) else {
                return missing_product();
            };
            match decode_product(id, body) {
                Some(product) => {
                    state.products[index] = product.clone();
                    (200, json!(product))
                }
                None => (400, json!({"error": "Niepoprawne dane"})),
            }
        }
        (HttpMethod::Delete, _) if product_id.is_some() => {
            let id = product_id.unwrap_or_default();
            let before = state.products.len();
            state.products.retain(|p| p.id != id);
            if state.products.len() == before {
                missing_product()
            } else {
                (200, json!({"message": "Produkt usunięty"}))
            }
        }
        _ => (404, json!({"error": "Not found"})),
    }
}

fn decode_product(id: i64, mut body: Value) -> Option<Product> {
    body.as_object_mut()?.insert("id".to_string(), json!(id));
    serde_json::from_value(body).ok()
}

fn missing_product() -> (u16, Value) {
    (404, json!({"error": "Produkt nie istnieje"}))
}

// ----------------------------------------------------------------------------
// Datos de ejemplo
// ----------------------------------------------------------------------------

pub fn sample_product(id: i64, nazwa: &str) -> Product {
    Product {
        id,
        nazwa: nazwa.to_string(),
        cena: 4.5,
        kategoria: "Nabiał".to_string(),
        ilosc: 10,
        producent: Some("Mlekovita".to_string()),
        data_dodania: Some("2024-04-30".to_string()),
    }
}

pub fn sample_payload(nazwa: &str) -> ProductPayload {
    ProductPayload {
        nazwa: nazwa.to_string(),
        cena: 4.5,
        kategoria: "Nabiał".to_string(),
        ilosc: 10,
        producent: Some("Mlekovita".to_string()),
        data_dodania: NaiveDate::from_ymd_opt(2024, 4, 30),
    }
}

pub fn sample_form(nazwa: &str) -> ProductForm {
    ProductForm {
        id: String::new(),
        nazwa: nazwa.to_string(),
        cena: "4.5".to_string(),
        kategoria: "Nabiał".to_string(),
        ilosc: "10".to_string(),
        producent: "Mlekovita".to_string(),
        data_dodania: "2024-04-30".to_string(),
    }
}

// ----------------------------------------------------------------------------
// Vistas que graban
// ----------------------------------------------------------------------------

#[derive(Clone)]
pub struct RecordingNotifier {
    shown: Rc<RefCell<Vec<Notification>>>,
    prompts: Rc<RefCell<Vec<ConfirmPrompt>>>,
    answer: Rc<Cell<bool>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            shown: Rc::default(),
            prompts: Rc::default(),
            answer: Rc::new(Cell::new(true)),
        }
    }

    pub fn handle(&self) -> Rc<dyn Notifier> {
        Rc::new(self.clone())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.borrow().clone()
    }

    /// Respuesta de los próximos diálogos de confirmación
    pub fn answer_confirm(&self, answer: bool) {
        self.answer.set(answer);
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }

    fn confirm(&self, prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool> {
        self.prompts.borrow_mut().push(prompt);
        future::ready(self.answer.get()).boxed_local()
    }
}

#[derive(Clone, Default)]
pub struct RecordingListView {
    renders: Rc<RefCell<Vec<ProductTable>>>,
}

impl RecordingListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Rc<dyn ListView> {
        Rc::new(self.clone())
    }

    pub fn renders(&self) -> Vec<ProductTable> {
        self.renders.borrow().clone()
    }

    pub fn last(&self) -> Option<ProductTable> {
        self.renders.borrow().last().cloned()
    }
}

impl ListView for RecordingListView {
    fn render(&self, table: &ProductTable) {
        self.renders.borrow_mut().push(table.clone());
    }
}

#[derive(Clone, Default)]
pub struct RecordingFormView {
    fills: Rc<RefCell<Vec<ProductForm>>>,
    resets: Rc<Cell<usize>>,
}

impl RecordingFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Rc<dyn ProductFormView> {
        Rc::new(self.clone())
    }

    pub fn fills(&self) -> Vec<ProductForm> {
        self.fills.borrow().clone()
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }
}

impl ProductFormView for RecordingFormView {
    fn fill(&self, values: &ProductForm) {
        self.fills.borrow_mut().push(values.clone());
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}

// ----------------------------------------------------------------------------
// Harness: viewmodels completos sobre los dobles
// ----------------------------------------------------------------------------

/// Día fijo para la validación de fechas
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

pub struct Harness {
    pub backend: FakeBackend,
    pub storage: MemoryTokenStorage,
    pub notifier: RecordingNotifier,
    pub list_view: RecordingListView,
    pub form_view: RecordingFormView,
    pub vm: AdminViewModels,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(FakeBackend::new(), MemoryTokenStorage::new())
    }

    /// Arranque con un token ya persistido
    pub fn authenticated(token: &str) -> Self {
        Self::build(
            FakeBackend::new(),
            MemoryTokenStorage::with_entry(TOKEN_STORAGE_KEY, token),
        )
    }

    /// Simula recargar la página: mismo backend y storage, todo lo demás nuevo
    pub fn reload(&self) -> Self {
        Self::build(self.backend.clone(), self.storage.clone())
    }

    fn build(backend: FakeBackend, storage: MemoryTokenStorage) -> Self {
        let notifier = RecordingNotifier::new();
        let list_view = RecordingListView::new();
        let form_view = RecordingFormView::new();
        let mut vm = AdminViewModels::new(
            backend.api_client(),
            Rc::new(storage.clone()),
            notifier.handle(),
            list_view.handle(),
            form_view.handle(),
        );
        vm.products = vm.products.clone().with_today(fixed_today);
        Self {
            backend,
            storage,
            notifier,
            list_view,
            form_view,
            vm,
        }
    }
}
