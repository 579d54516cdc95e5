// Constantes compartidas: claves de storage, ids del DOM y textos de la UI

/// Clave de localStorage donde vive el bearer token
pub const TOKEN_STORAGE_KEY: &str = "access_token";

// Ids del documento (estructura HTML externa)
pub const AUTH_FORM_ID: &str = "authForm";
pub const LOGIN_INPUT_ID: &str = "login";
pub const PASSWORD_INPUT_ID: &str = "password";
pub const LOGIN_BUTTON_ID: &str = "loginBtn";
pub const REGISTER_BUTTON_ID: &str = "registerBtn";
pub const LOGOUT_BUTTON_ID: &str = "logoutBtn";
pub const PRODUCT_FORM_ID: &str = "productForm";
pub const PRODUCT_ID_INPUT_ID: &str = "productId";
pub const PRODUCT_LIST_BODY_ID: &str = "produktyList";

/// Columnas de la tabla: id, nazwa, cena, kategoria, ilosc, producent, data, acciones
pub const PRODUCT_TABLE_COLUMNS: u32 = 8;
pub const EMPTY_CELL: &str = "-";

// Textos visibles
pub const TITLE_ERROR: &str = "Błąd";
pub const TITLE_SUCCESS: &str = "Sukces";
pub const TITLE_LOGGED_OUT: &str = "Wylogowano";
pub const TITLE_DELETED: &str = "Usunięto!";
pub const TITLE_TIMEOUT: &str = "Brak odpowiedzi";

pub const MSG_LOGGED_IN: &str = "Zalogowano!";
pub const MSG_REGISTERED: &str = "Zarejestrowano użytkownika";
pub const MSG_LOGGED_OUT: &str = "Zostałeś wylogowany.";
pub const MSG_MUST_LOG_IN: &str = "Musisz być zalogowany!";
pub const MSG_PRODUCT_SAVED: &str = "Zapisano produkt";
pub const MSG_PRODUCT_DELETED: &str = "Produkt został usunięty.";
pub const MSG_NO_PRODUCTS: &str = "Brak produktów w bazie.";
pub const MSG_VALIDATION: &str = "Popraw dane formularza";
pub const MSG_TIMEOUT: &str = "Serwer nie odpowiedział na czas. Spróbuj ponownie.";
pub const MSG_NETWORK: &str = "Nie udało się połączyć z serwerem. Spróbuj ponownie.";

pub const CONFIRM_DELETE_TITLE: &str = "Na pewno chcesz usunąć ten produkt?";
pub const CONFIRM_YES: &str = "Tak";
pub const CONFIRM_NO: &str = "Nie";

pub const BUTTON_EDIT: &str = "Edytuj";
pub const BUTTON_DELETE: &str = "Usuń";
