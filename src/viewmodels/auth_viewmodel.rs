// ============================================================================
// AUTH VIEWMODEL - Ciclo de vida de la sesión
// ============================================================================
// Resume silencioso desde credenciales guardadas, login y logout.
// ============================================================================

use std::rc::Rc;

use crate::models::auth::User;
use crate::models::validation::{require_password_length, Validate};
use crate::services::{ApiClient, ClientError};
use crate::state::{AuthPhase, ReactiveState};
use crate::stores::SessionStore;

pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ClientError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ClientError::validation("Please fill in all fields"));
        }
        require_password_length(&self.password)
    }
}

pub struct AuthViewModel {
    api: Rc<ApiClient>,
    session: Rc<SessionStore>,
    state: ReactiveState<AuthPhase>,
}

impl AuthViewModel {
    pub fn new(api: Rc<ApiClient>, session: Rc<SessionStore>) -> Self {
        Self {
            api,
            session,
            state: ReactiveState::new(AuthPhase::Pending),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.get()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with(|phase| phase.user().cloned())
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.state.subscribe(callback);
    }

    /// Resume silencioso: sin credencial no hay ninguna request.
    pub async fn mount(&self) {
        match self.session.load() {
            Some(credentials) => {
                log::info!("💾 [AUTH] Credencial encontrada, restaurando sesión...");
                self.api.set_bearer(&credentials.access);
                self.resolve_current_user().await;
            }
            None => {
                log::info!("ℹ️ [AUTH] Sin credencial guardada");
                self.state.set(AuthPhase::Anonymous);
            }
        }
    }

    /// Cualquier fallo cuenta como logout implícito; nunca se reintenta.
    pub async fn resolve_current_user(&self) {
        match self.api.current_user().await {
            Ok(user) => {
                log::info!("✅ [AUTH] Sesión restaurada para {} ({})", user.email, user.role.as_str());
                self.state.set(AuthPhase::Authenticated(user));
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] No se pudo restaurar la sesión: {}", e);
                self.logout();
            }
        }
    }

    /// Login. En error devuelve el mensaje para el formulario y no toca la fase.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, String> {
        match self.api.login(email, password).await {
            Ok(response) => {
                self.session.save(&response.credentials());
                self.api.set_bearer(&response.access_token);
                log::info!("✅ [AUTH] Login correcto: {}", response.user.email);
                self.state.set(AuthPhase::Authenticated(response.user.clone()));
                Ok(response.user)
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login fallido: {}", e);
                Err(e.user_message(LOGIN_FAILED))
            }
        }
    }

    /// Validación local y luego `login`; un formulario inválido no sale a la red.
    pub async fn submit_login(&self, form: &LoginForm) -> Result<User, String> {
        if let Err(e) = form.validate() {
            return Err(e.user_message(LOGIN_FAILED));
        }
        self.login(form.email.trim(), &form.password).await
    }

    /// Idempotente; limpia storage y bearer aunque no hubiera sesión.
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.session.clear();
        self.api.clear_bearer();
        self.state.set(AuthPhase::Anonymous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::{Credentials, Role};
    use crate::services::http::{HttpMethod, MockTransport};
    use crate::utils::storage::MemoryStorage;
    use serde_json::json;
    use std::cell::Cell;

    const ME: &str = "http://lms.test/api/users/me";
    const LOGIN: &str = "http://lms.test/api/auth/login";

    struct Harness {
        transport: Rc<MockTransport>,
        storage: Rc<MemoryStorage>,
        session: Rc<SessionStore>,
        api: Rc<ApiClient>,
        auth: AuthViewModel,
    }

    fn harness() -> Harness {
        let transport = Rc::new(MockTransport::new());
        let storage = Rc::new(MemoryStorage::new());
        let session = Rc::new(SessionStore::new(storage.clone()));
        let api = Rc::new(ApiClient::new("http://lms.test/api", transport.clone()));
        let auth = AuthViewModel::new(api.clone(), session.clone());
        Harness {
            transport,
            storage,
            session,
            api,
            auth,
        }
    }

    fn user_json() -> serde_json::Value {
        json!({"id": "u-1", "name": "Sam Student", "email": "user@example.com", "role": "STUDENT"})
    }

    #[test]
    fn starts_pending() {
        let h = harness();
        assert!(h.auth.phase().is_loading());
        assert_eq!(h.auth.current_user(), None);
    }

    #[tokio::test]
    async fn mount_without_credential_is_anonymous_and_offline() {
        let h = harness();
        h.auth.mount().await;
        assert_eq!(h.auth.phase(), AuthPhase::Anonymous);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn mount_with_valid_credential_authenticates() {
        let h = harness();
        h.session.save(&Credentials::new("stored-access", "stored-refresh"));
        h.transport.mock_response(HttpMethod::Get, ME, 200, user_json());

        h.auth.mount().await;

        let user = h.auth.current_user().unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(h.api.bearer().as_deref(), Some("stored-access"));
        assert_eq!(
            h.transport.requests()[0].header("Authorization"),
            Some("Bearer stored-access")
        );
    }

    #[tokio::test]
    async fn mount_with_rejected_credential_logs_out() {
        for status in [401u16, 403, 500] {
            let h = harness();
            h.session.save(&Credentials::new("expired", "refresh"));
            h.transport.mock_response(HttpMethod::Get, ME, status, json!({"detail": "Invalid token"}));

            h.auth.mount().await;

            assert_eq!(h.auth.phase(), AuthPhase::Anonymous);
            assert_eq!(h.session.load(), None);
            assert!(h.storage.is_empty());
            assert_eq!(h.api.bearer(), None);
        }
    }

    #[tokio::test]
    async fn mount_with_unreachable_server_logs_out_without_retry() {
        let h = harness();
        h.session.save(&Credentials::new("acc", "ref"));

        h.auth.mount().await;

        assert_eq!(h.auth.phase(), AuthPhase::Anonymous);
        assert_eq!(h.session.load(), None);
        assert_eq!(h.transport.count_for(HttpMethod::Get, ME), 1);
    }

    #[tokio::test]
    async fn login_success_stores_tokens_and_bearer() {
        let h = harness();
        h.auth.mount().await;
        h.transport.mock_response(
            HttpMethod::Post,
            LOGIN,
            200,
            json!({"access_token": "new-acc", "refresh_token": "new-ref", "token_type": "bearer", "user": user_json()}),
        );

        let user = h.auth.login("user@example.com", "validpass123").await.unwrap();

        assert_eq!(user.email, "user@example.com");
        assert_eq!(h.session.load(), Some(Credentials::new("new-acc", "new-ref")));
        assert_eq!(h.api.bearer().as_deref(), Some("new-acc"));
        assert_eq!(h.auth.phase(), AuthPhase::Authenticated(user));
    }

    #[tokio::test]
    async fn login_failure_surfaces_detail_or_generic_message() {
        let h = harness();
        h.auth.mount().await;

        // sin servidor
        let err = h.auth.login("user@example.com", "validpass123").await.unwrap_err();
        assert_eq!(err, LOGIN_FAILED);

        h.transport.mock_response(HttpMethod::Post, LOGIN, 400, json!({"detail": "Invalid credentials"}));
        let err = h.auth.login("user@example.com", "validpass123").await.unwrap_err();
        assert_eq!(err, "Invalid credentials");

        assert_eq!(h.auth.phase(), AuthPhase::Anonymous);
        assert_eq!(h.session.load(), None);
    }

    #[tokio::test]
    async fn login_failure_does_not_settle_pending_phase() {
        let h = harness();
        let _ = h.auth.login("user@example.com", "validpass123").await;
        assert!(h.auth.phase().is_loading());
    }

    #[tokio::test]
    async fn short_password_never_reaches_network() {
        let h = harness();
        h.auth.mount().await;

        let err = h.auth.submit_login(&LoginForm::new("user@example.com", "short1")).await.unwrap_err();
        assert_eq!(err, "Password must be at least 8 characters");

        let err = h.auth.submit_login(&LoginForm::new("  ", "validpass123")).await.unwrap_err();
        assert_eq!(err, "Please fill in all fields");
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn logout_is_idempotent() {
        let h = harness();
        let notifications = Rc::new(Cell::new(0));
        {
            let notifications = notifications.clone();
            h.auth.subscribe(move || notifications.set(notifications.get() + 1));
        }
        h.session.save(&Credentials::new("acc", "ref"));
        h.api.set_bearer("acc");

        h.auth.logout();
        let once = h.auth.phase();
        h.auth.logout();

        assert_eq!(h.auth.phase(), once);
        assert_eq!(once, AuthPhase::Anonymous);
        assert_eq!(h.session.load(), None);
        assert_eq!(h.api.bearer(), None);
        assert_eq!(notifications.get(), 2);
    }

    #[test]
    fn logout_without_session_still_clears() {
        use crate::utils::storage::KeyValueStorage;

        let h = harness();
        // medio par: no hay sesión cargable, pero la clave debe desaparecer igual
        h.storage.set_item("access_token", "stray");
        assert_eq!(h.session.load(), None);

        h.auth.logout();
        assert!(h.storage.is_empty());
        assert_eq!(h.api.bearer(), None);
        assert_eq!(h.auth.phase(), AuthPhase::Anonymous);
    }
}
