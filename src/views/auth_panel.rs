// ============================================================================
// AUTH PANEL - Affordances de login/registro/logout
// ============================================================================

use crate::dom::{input_value, set_button_disabled, set_visible};
use crate::models::Credentials;
use crate::state::AuthStatus;
use crate::utils::{
    LOGIN_BUTTON_ID, LOGIN_INPUT_ID, LOGOUT_BUTTON_ID, PASSWORD_INPUT_ID, REGISTER_BUTTON_ID,
};

/// Intención del submit de #authForm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthIntent {
    Login,
    Register,
}

impl AuthIntent {
    /// Según el id del botón que hizo submit. Sin botón reconocido = login.
    pub fn from_submitter(submitter_id: Option<&str>) -> Self {
        match submitter_id {
            Some(REGISTER_BUTTON_ID) => AuthIntent::Register,
            _ => AuthIntent::Login,
        }
    }
}

/// Login/registro deshabilitados con sesión; logout visible sólo con sesión
pub fn apply_auth_affordances(status: AuthStatus) {
    let authenticated = status.is_authenticated();
    set_button_disabled(LOGIN_BUTTON_ID, authenticated);
    set_button_disabled(REGISTER_BUTTON_ID, authenticated);
    set_visible(LOGOUT_BUTTON_ID, authenticated);
}

pub fn read_credentials() -> Credentials {
    Credentials::new(input_value(LOGIN_INPUT_ID), input_value(PASSWORD_INPUT_ID))
}
