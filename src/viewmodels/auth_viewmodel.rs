// ============================================================================
// AUTH VIEWMODEL - Máquina de estados anonymous ⇄ authenticated
// ============================================================================
// login OK  → token al store, notificación, refresh de la lista
// login KO  → presenter, el estado no cambia
// register  → transición lateral, nunca guarda token
// logout    → local, incondicional
// login/register sólo desde anonymous: con sesión no hay request
// ============================================================================

use crate::error::AppError;
use crate::models::{validate_credentials, Credentials, Notification};
use crate::services::AuthService;
use crate::state::{Action, AuthStatus, InFlight, SessionState};
use crate::utils::{MSG_LOGGED_IN, MSG_LOGGED_OUT, MSG_REGISTERED, TITLE_LOGGED_OUT, TITLE_SUCCESS};
use crate::viewmodels::error_presenter::ErrorPresenter;
use crate::viewmodels::list_viewmodel::ListViewModel;
use crate::viewmodels::{Outcome, SkipReason};

#[derive(Clone)]
pub struct AuthViewModel {
    service: AuthService,
    session: SessionState,
    list: ListViewModel,
    presenter: ErrorPresenter,
    in_flight: InFlight,
}

impl AuthViewModel {
    pub fn new(
        service: AuthService,
        session: SessionState,
        list: ListViewModel,
        presenter: ErrorPresenter,
        in_flight: InFlight,
    ) -> Self {
        Self {
            service,
            session,
            list,
            presenter,
            in_flight,
        }
    }

    /// Estado actual, derivado siempre del token store
    pub fn status(&self) -> AuthStatus {
        self.session.status()
    }

    pub async fn login(&self, credentials: Credentials) -> Result<Outcome<()>, AppError> {
        if let Some(skipped) = self.refuse_when_authenticated("login") {
            return Ok(skipped);
        }
        let Some(_ticket) = self.in_flight.try_begin(Action::Login) else {
            return Ok(Outcome::Skipped(SkipReason::InFlight));
        };

        if let Err(issues) = validate_credentials(&credentials) {
            return Err(self.fail(AppError::ValidationFailed(issues)));
        }

        match self.service.login(&credentials).await {
            Ok(token) => {
                self.session.set(token);
                log::info!("✅ [AUTH] Login correcto: {}", credentials.login);
                self.presenter
                    .notifier()
                    .notify(Notification::success(TITLE_SUCCESS, MSG_LOGGED_IN));
                // Después del éxito: si la lista falla, su error es el último popup
                let _ = self.list.refresh().await;
                Ok(Outcome::Done(()))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn register(&self, credentials: Credentials) -> Result<Outcome<()>, AppError> {
        if let Some(skipped) = self.refuse_when_authenticated("register") {
            return Ok(skipped);
        }
        let Some(_ticket) = self.in_flight.try_begin(Action::Register) else {
            return Ok(Outcome::Skipped(SkipReason::InFlight));
        };

        if let Err(issues) = validate_credentials(&credentials) {
            return Err(self.fail(AppError::ValidationFailed(issues)));
        }

        match self.service.register(&credentials).await {
            Ok(()) => {
                log::info!("✅ [AUTH] Usuario registrado: {}", credentials.login);
                self.presenter
                    .notifier()
                    .notify(Notification::success(TITLE_SUCCESS, MSG_REGISTERED));
                Ok(Outcome::Done(()))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Logout local: sin llamada al backend
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.session.clear();
        self.presenter
            .notifier()
            .notify(Notification::info(TITLE_LOGGED_OUT, MSG_LOGGED_OUT));
    }

    fn refuse_when_authenticated(&self, action: &str) -> Option<Outcome<()>> {
        if !self.session.is_authenticated() {
            return None;
        }
        log::debug!("🔒 [AUTH] {} ignorado: ya hay sesión", action);
        Some(Outcome::Skipped(SkipReason::AlreadyAuthenticated))
    }

    fn fail(&self, error: AppError) -> AppError {
        log::warn!("⚠️ [AUTH] {}", error);
        self.presenter.report(&error);
        error
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Credentials, Severity};
    use crate::services::HttpMethod;
    use crate::state::AuthStatus;
    use crate::test_support::{sample_product, Harness};
    use crate::viewmodels::{Outcome, SkipReason};
    use futures::executor::block_on;
    use futures::task::noop_waker_ref;
    use futures::FutureExt;
    use serde_json::json;
    use std::task::Context;

    #[test]
    fn successful_login_sets_token_refreshes_and_notifies() {
        let h = Harness::new();
        h.backend.add_user("ania", "haslo");
        h.backend.insert_product(sample_product(1, "Mleko"));

        let outcome = block_on(h.vm.auth.login(Credentials::new("ania", "haslo"))).unwrap();

        assert_eq!(outcome, Outcome::Done(()));
        assert_eq!(h.vm.auth.status(), AuthStatus::Authenticated);
        assert_eq!(h.vm.session.get().as_deref(), Some("token-ania"));
        assert_eq!(h.list_view.last().unwrap().product_rows().count(), 1);
        let shown = h.notifier.notifications();
        assert_eq!(shown[0].severity, Severity::Success);
        assert_eq!(shown[0].message, "Zalogowano!");
    }

    #[test]
    fn failed_login_presents_backend_message_and_stays_anonymous() {
        let h = Harness::new();
        h.backend.add_user("ania", "haslo");

        assert!(block_on(h.vm.auth.login(Credentials::new("ania", "zle"))).is_err());

        assert_eq!(h.vm.auth.status(), AuthStatus::Anonymous);
        assert_eq!(h.notifier.notifications()[0].message, "bad login");
        assert!(h.list_view.renders().is_empty());
    }

    #[test]
    fn empty_credentials_never_reach_the_backend() {
        let h = Harness::new();
        assert!(block_on(h.vm.auth.login(Credentials::new("", ""))).is_err());
        assert!(h.backend.requests().is_empty());
        assert_eq!(h.notifier.notifications()[0].severity, Severity::Error);
    }

    #[test]
    fn register_never_sets_a_token() {
        let h = Harness::new();
        let outcome = block_on(h.vm.auth.register(Credentials::new("nowy", "haslo"))).unwrap();

        assert_eq!(outcome, Outcome::Done(()));
        assert_eq!(h.vm.auth.status(), AuthStatus::Anonymous);
        assert_eq!(h.notifier.notifications()[0].message, "Zarejestrowano użytkownika");
    }

    #[test]
    fn duplicate_registration_goes_through_presenter() {
        let h = Harness::new();
        h.backend.add_user("ania", "haslo");
        assert!(block_on(h.vm.auth.register(Credentials::new("ania", "x"))).is_err());
        assert_eq!(h.notifier.notifications()[0].message, "Użytkownik już istnieje");
    }

    #[test]
    fn logout_is_local_and_unconditional() {
        let h = Harness::authenticated("token-ania");
        h.vm.auth.logout();

        assert_eq!(h.vm.auth.status(), AuthStatus::Anonymous);
        assert!(h.backend.requests().is_empty());
        assert_eq!(h.notifier.notifications()[0].severity, Severity::Info);
    }

    #[test]
    fn authenticated_iff_last_login_succeeded_without_logout_across_reloads() {
        let h = Harness::new();
        h.backend.add_user("ania", "haslo");

        let steps: [(&str, bool); 6] = [
            ("login-ok", true),
            ("logout", false),
            ("login-bad", false),
            ("logout", false),
            ("login-bad", false),
            ("login-ok", true),
        ];

        let mut current = h;
        for (step, expected) in steps {
            match step {
                "login-ok" => {
                    let _ = block_on(current.vm.auth.login(Credentials::new("ania", "haslo")));
                }
                "login-bad" => {
                    let _ = block_on(current.vm.auth.login(Credentials::new("ania", "zle")));
                }
                _ => current.vm.auth.logout(),
            }
            assert_eq!(current.vm.session.is_authenticated(), expected, "after {}", step);

            current = current.reload();
            assert_eq!(current.vm.session.is_authenticated(), expected, "after reload of {}", step);
        }
    }

    #[test]
    fn login_and_register_are_refused_while_authenticated() {
        let h = Harness::authenticated("token-ania");
        h.backend.add_user("ania", "haslo");
        h.backend.add_user("bob", "pw");

        let bad = block_on(h.vm.auth.login(Credentials::new("ania", "zle"))).unwrap();
        let other = block_on(h.vm.auth.login(Credentials::new("bob", "pw"))).unwrap();
        let register = block_on(h.vm.auth.register(Credentials::new("nowy", "x"))).unwrap();

        for outcome in [bad, other, register] {
            assert_eq!(outcome, Outcome::Skipped(SkipReason::AlreadyAuthenticated));
        }
        assert!(h.backend.requests().is_empty());
        assert_eq!(h.vm.session.get().as_deref(), Some("token-ania"));
        assert!(h.notifier.notifications().is_empty());
    }

    #[test]
    fn list_failure_after_login_stays_the_last_popup() {
        let h = Harness::new();
        h.backend.respond_next(200, json!({"access_token": "token-ania"}));
        h.backend.respond_next(500, json!({"error": "db down"}));

        let outcome = block_on(h.vm.auth.login(Credentials::new("ania", "haslo"))).unwrap();

        assert_eq!(outcome, Outcome::Done(()));
        assert!(h.vm.session.is_authenticated());
        let shown = h.notifier.notifications();
        assert_eq!(shown[0].message, "Zalogowano!");
        let last = shown.last().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.message, "db down");
    }

    #[test]
    fn second_login_while_first_is_pending_is_dropped() {
        let h = Harness::new();
        h.backend.add_user("ania", "haslo");
        h.backend.hold_responses(true);

        let mut first = h.vm.auth.login(Credentials::new("ania", "haslo")).boxed_local();
        let mut cx = Context::from_waker(noop_waker_ref());
        assert!(first.poll_unpin(&mut cx).is_pending());

        let second = block_on(h.vm.auth.login(Credentials::new("ania", "haslo"))).unwrap();
        assert_eq!(second, Outcome::Skipped(SkipReason::InFlight));

        h.backend.hold_responses(false);
        assert_eq!(block_on(first).unwrap(), Outcome::Done(()));
        let logins = h
            .backend
            .requests()
            .iter()
            .filter(|r| r.method == HttpMethod::Post && r.url == "/login")
            .count();
        assert_eq!(logins, 1);
    }
}
