// ============================================================================
// SETUP VIEWMODEL - Gate de primera instalación + wizard
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::setup::{SetupRequest, SetupStatus};
use crate::models::validation::{
    require_email, require_length, require_matching_passwords, require_password_length, Validate,
};
use crate::services::{ApiClient, ClientError};
use crate::state::{ReactiveState, SetupPhase};
use crate::stores::SessionStore;

pub const SETUP_FAILED: &str = "Setup failed";

/// Pasos lineales del wizard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupStep {
    Institute,
    Administrator,
    Review,
}

impl SetupStep {
    pub fn index(&self) -> usize {
        match self {
            SetupStep::Institute => 0,
            SetupStep::Administrator => 1,
            SetupStep::Review => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SetupStep::Institute => "Institute",
            SetupStep::Administrator => "Administrator account",
            SetupStep::Review => "Review",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetupForm {
    pub institute_name: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub confirm_password: String,
}

impl SetupForm {
    fn validate_institute(&self) -> Result<(), ClientError> {
        require_length("Institute name", &self.institute_name, 2, 200)
    }

    fn validate_administrator(&self) -> Result<(), ClientError> {
        require_length("Admin name", &self.admin_name, 2, 100)?;
        require_email(&self.admin_email)?;
        require_matching_passwords(&self.admin_password, &self.confirm_password)?;
        require_password_length(&self.admin_password)
    }

    pub fn to_request(&self) -> SetupRequest {
        SetupRequest {
            admin_name: self.admin_name.trim().to_string(),
            admin_email: self.admin_email.trim().to_string(),
            admin_password: self.admin_password.clone(),
            institute_name: self.institute_name.trim().to_string(),
        }
    }
}

impl Validate for SetupForm {
    fn validate(&self) -> Result<(), ClientError> {
        self.validate_institute()?;
        self.validate_administrator()
    }
}

/// Wizard de setup: avanza paso a paso validando solo los campos del paso
#[derive(Clone, Debug, PartialEq)]
pub struct SetupWizard {
    pub step: SetupStep,
    pub form: SetupForm,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self {
            step: SetupStep::Institute,
            form: SetupForm::default(),
        }
    }
}

impl SetupWizard {
    pub fn next(&mut self) -> Result<SetupStep, String> {
        let next = match self.step {
            SetupStep::Institute => {
                self.form.validate_institute().map_err(|e| e.user_message(SETUP_FAILED))?;
                SetupStep::Administrator
            }
            SetupStep::Administrator => {
                self.form.validate_administrator().map_err(|e| e.user_message(SETUP_FAILED))?;
                SetupStep::Review
            }
            SetupStep::Review => SetupStep::Review,
        };
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> SetupStep {
        self.step = match self.step {
            SetupStep::Institute | SetupStep::Administrator => SetupStep::Institute,
            SetupStep::Review => SetupStep::Administrator,
        };
        self.step
    }
}

pub struct SetupViewModel {
    api: Rc<ApiClient>,
    session: Rc<SessionStore>,
    state: ReactiveState<SetupPhase>,
    checked: Cell<bool>,
}

impl SetupViewModel {
    pub fn new(api: Rc<ApiClient>, session: Rc<SessionStore>) -> Self {
        Self {
            api,
            session,
            state: ReactiveState::new(SetupPhase::Checking),
            checked: Cell::new(false),
        }
    }

    pub fn phase(&self) -> SetupPhase {
        self.state.get()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.state.subscribe(callback);
    }

    /// Consulta /setup/status una sola vez por instancia. Un fallo se trata
    /// como setup incompleto.
    pub async fn mount(&self) {
        if self.checked.replace(true) {
            return;
        }

        let status = match self.api.setup_status().await {
            Ok(status) => status,
            Err(e) => {
                log::warn!("⚠️ [SETUP] No se pudo consultar el estado: {}", e);
                SetupStatus::unknown()
            }
        };
        log::info!(
            "🏫 [SETUP] complete={} step={}",
            status.is_setup_complete,
            status.setup_step
        );
        self.state.set(SetupPhase::from_status(status));
    }

    /// Envía el formulario completo. Solo una request cuando la validación pasa.
    pub async fn initialize(&self, form: &SetupForm) -> Result<(), String> {
        form.validate().map_err(|e| e.user_message(SETUP_FAILED))?;

        let response = self
            .api
            .initialize_setup(&form.to_request())
            .await
            .map_err(|e| {
                log::error!("❌ [SETUP] Inicialización fallida: {}", e);
                e.user_message(SETUP_FAILED)
            })?;

        self.session.save(&response.credentials());
        self.api.set_bearer(&response.access_token);
        log::info!("✅ [SETUP] Sistema inicializado");
        self.state.set(SetupPhase::Complete);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Credentials;
    use crate::services::http::{HttpMethod, MockTransport};
    use crate::utils::storage::MemoryStorage;
    use serde_json::json;

    const STATUS: &str = "http://lms.test/api/setup/status";
    const INITIALIZE: &str = "http://lms.test/api/setup/initialize";

    fn setup() -> (Rc<MockTransport>, Rc<SessionStore>, Rc<ApiClient>, SetupViewModel) {
        let transport = Rc::new(MockTransport::new());
        let session = Rc::new(SessionStore::new(Rc::new(MemoryStorage::new())));
        let api = Rc::new(ApiClient::new("http://lms.test/api", transport.clone()));
        let gate = SetupViewModel::new(api.clone(), session.clone());
        (transport, session, api, gate)
    }

    fn valid_form() -> SetupForm {
        SetupForm {
            institute_name: "Northfield Institute of Technology".into(),
            admin_name: "Ada Admin".into(),
            admin_email: "admin@northfield.edu".into(),
            admin_password: "validpass123".into(),
            confirm_password: "validpass123".into(),
        }
    }

    #[tokio::test]
    async fn complete_status_opens_gate_and_is_checked_once() {
        let (transport, _, _, gate) = setup();
        transport.mock_response(HttpMethod::Get, STATUS, 200, json!({"is_setup_complete": true, "setup_step": 1}));

        assert_eq!(gate.phase(), SetupPhase::Checking);
        gate.mount().await;
        gate.mount().await;

        assert!(gate.phase().is_complete());
        assert_eq!(transport.count_for(HttpMethod::Get, STATUS), 1);
    }

    #[tokio::test]
    async fn failed_status_check_fails_closed() {
        let (transport, _, _, gate) = setup();
        gate.mount().await;
        assert_eq!(gate.phase(), SetupPhase::Incomplete(SetupStatus::unknown()));

        let (transport2, _, _, gate2) = setup();
        transport2.mock_response(HttpMethod::Get, STATUS, 500, json!({"detail": "db down"}));
        gate2.mount().await;
        assert!(!gate2.phase().is_complete());
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn incomplete_status_keeps_step() {
        let (transport, _, _, gate) = setup();
        transport.mock_response(HttpMethod::Get, STATUS, 200, json!({"is_setup_complete": false, "setup_step": 0}));
        gate.mount().await;
        assert_eq!(
            gate.phase(),
            SetupPhase::Incomplete(SetupStatus {
                is_setup_complete: false,
                setup_step: 0
            })
        );
    }

    #[tokio::test]
    async fn mismatched_passwords_send_nothing() {
        let (transport, _, _, gate) = setup();
        let form = SetupForm {
            admin_password: "abc123".into(),
            confirm_password: "abc124".into(),
            ..valid_form()
        };
        let err = gate.initialize(&form).await.unwrap_err();
        assert_eq!(err, "Passwords do not match");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn short_password_sends_nothing() {
        let (transport, _, _, gate) = setup();
        let form = SetupForm {
            admin_password: "short1".into(),
            confirm_password: "short1".into(),
            ..valid_form()
        };
        let err = gate.initialize(&form).await.unwrap_err();
        assert_eq!(err, "Password must be at least 8 characters");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn valid_form_posts_once_and_completes() {
        let (transport, session, api, gate) = setup();
        transport.mock_response(HttpMethod::Get, STATUS, 200, json!({"is_setup_complete": false, "setup_step": 0}));
        transport.mock_response(
            HttpMethod::Post,
            INITIALIZE,
            200,
            json!({
                "access_token": "setup-acc",
                "refresh_token": "setup-ref",
                "token_type": "bearer",
                "user": {"id": "u-1", "name": "Ada Admin", "email": "admin@northfield.edu", "role": "SUPER_ADMIN"}
            }),
        );

        gate.mount().await;
        gate.initialize(&valid_form()).await.unwrap();

        assert_eq!(transport.count_for(HttpMethod::Post, INITIALIZE), 1);
        let body: serde_json::Value =
            serde_json::from_str(transport.requests()[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "admin_name": "Ada Admin",
                "admin_email": "admin@northfield.edu",
                "admin_password": "validpass123",
                "institute_name": "Northfield Institute of Technology"
            })
        );
        assert_eq!(session.load(), Some(Credentials::new("setup-acc", "setup-ref")));
        assert_eq!(api.bearer().as_deref(), Some("setup-acc"));
        assert!(gate.phase().is_complete());

        // completado: no se vuelve a consultar el estado
        gate.mount().await;
        assert_eq!(transport.count_for(HttpMethod::Get, STATUS), 1);
    }

    #[tokio::test]
    async fn server_rejection_is_reported_inline() {
        let (transport, session, _, gate) = setup();
        transport.mock_response(HttpMethod::Post, INITIALIZE, 400, json!({"detail": "System already initialized"}));

        let err = gate.initialize(&valid_form()).await.unwrap_err();
        assert_eq!(err, "System already initialized");
        assert_eq!(session.load(), None);
        assert!(!gate.phase().is_complete());
    }

    #[test]
    fn wizard_validates_each_step_before_advancing() {
        let mut wizard = SetupWizard::default();
        assert_eq!(wizard.next().unwrap_err(), "Institute name must be at least 2 characters");
        assert_eq!(wizard.step, SetupStep::Institute);

        wizard.form.institute_name = "Northfield".into();
        assert_eq!(wizard.next(), Ok(SetupStep::Administrator));

        wizard.form.admin_name = "Ada Admin".into();
        wizard.form.admin_email = "admin@northfield.edu".into();
        wizard.form.admin_password = "abc12345".into();
        wizard.form.confirm_password = "abc12346".into();
        assert_eq!(wizard.next().unwrap_err(), "Passwords do not match");

        wizard.form.confirm_password = "abc12345".into();
        assert_eq!(wizard.next(), Ok(SetupStep::Review));
        assert_eq!(wizard.back(), SetupStep::Administrator);
        assert_eq!(wizard.back(), SetupStep::Institute);
        assert_eq!(wizard.back(), SetupStep::Institute);
    }
}
