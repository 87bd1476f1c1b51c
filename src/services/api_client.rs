// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Sin lógica de negocio. El único estado mutable es el mapa de headers por
// defecto, y solo cambia vía `set_bearer` / `clear_bearer`.
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::academic::Resource;
use crate::models::auth::{LoginRequest, LoginResponse, User};
use crate::models::setup::{SetupRequest, SetupResponse, SetupStatus};
use crate::services::error::ClientError;
use crate::services::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

pub struct ApiClient {
    base_url: String,
    default_headers: RefCell<BTreeMap<String, String>>,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(HEADER_CONTENT_TYPE.to_string(), "application/json".to_string());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: RefCell::new(headers),
            transport,
        }
    }

    /// Cliente del navegador apuntando a la API configurada en tiempo de compilación
    #[cfg(target_arch = "wasm32")]
    pub fn from_config() -> Self {
        use crate::services::http::FetchTransport;
        Self::new(crate::config::CONFIG.api_base_url(), Rc::new(FetchTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_bearer(&self, token: &str) {
        self.default_headers
            .borrow_mut()
            .insert(HEADER_AUTHORIZATION.to_string(), format!("Bearer {}", token));
    }

    pub fn clear_bearer(&self) {
        self.default_headers.borrow_mut().remove(HEADER_AUTHORIZATION);
    }

    /// Token instalado actualmente (sin el prefijo `Bearer `)
    pub fn bearer(&self) -> Option<String> {
        self.default_headers
            .borrow()
            .get(HEADER_AUTHORIZATION)
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.build(HttpMethod::Get, path);
        let response = self.send(request).await?;
        response.json()
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let json = serde_json::to_string(body).map_err(|e| ClientError::Decode(format!("Serialization error: {}", e)))?;
        let request = self.build(HttpMethod::Post, path).with_body(json);
        let response = self.send(request).await?;
        response.json()
    }

    fn build(&self, method: HttpMethod, path: &str) -> HttpRequest {
        let mut request = HttpRequest::new(method, &self.url(path));
        request.headers = self.default_headers.borrow().clone();
        request
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("🌐 [API] {} {} sin respuesta: {}", method.as_str(), url, e);
            e
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let detail = error_detail(&response.body);
        log::warn!(
            "❌ [API] {} {} -> HTTP {} ({})",
            method.as_str(),
            url,
            response.status,
            detail.as_deref().unwrap_or("sin detalle")
        );
        Err(ClientError::Api {
            status: response.status,
            detail,
        })
    }

    // ------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------

    pub async fn setup_status(&self) -> Result<SetupStatus, ClientError> {
        self.get("/setup/status").await
    }

    pub async fn initialize_setup(&self, request: &SetupRequest) -> Result<SetupResponse, ClientError> {
        log::info!("🏫 [API] Inicializando institución '{}'", request.institute_name);
        self.post("/setup/initialize", request).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        log::info!("🔐 [API] Login para usuario: {}", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &request).await
    }

    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.get("/users/me").await
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        self.get(R::PATH).await
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, ClientError> {
        self.post(R::PATH, draft).await
    }
}

/// Extrae el `detail` de un cuerpo de error estilo FastAPI.
///
/// `detail` puede ser un string o una lista de errores de validación
/// (`[{"loc": [...], "msg": "...", ...}]`); en ese caso se unen los `msg`.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::academic::{Department, DepartmentDraft};
    use crate::services::http::MockTransport;
    use serde_json::json;

    const BASE: &str = "http://lms.test/api";

    fn client() -> (Rc<MockTransport>, ApiClient) {
        let transport = Rc::new(MockTransport::new());
        (transport.clone(), ApiClient::new(format!("{}/", BASE), transport))
    }

    #[tokio::test]
    async fn requests_carry_json_content_type_and_bearer_when_set() {
        let (transport, api) = client();
        transport.mock_response(
            HttpMethod::Get,
            "http://lms.test/api/setup/status",
            200,
            json!({"is_setup_complete": true, "setup_step": 1}),
        );

        api.setup_status().await.unwrap();
        api.set_bearer("tok-1");
        let status = api.setup_status().await.unwrap();
        assert!(status.is_setup_complete);

        let requests = transport.requests();
        assert_eq!(requests[0].header(HEADER_CONTENT_TYPE), Some("application/json"));
        assert_eq!(requests[0].header(HEADER_AUTHORIZATION), None);
        assert_eq!(requests[1].header(HEADER_AUTHORIZATION), Some("Bearer tok-1"));
        assert_eq!(api.bearer().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn clear_bearer_removes_header() {
        let (transport, api) = client();
        transport.mock_response(HttpMethod::Get, "http://lms.test/api/users/me", 401, json!({"detail": "Invalid token"}));

        api.set_bearer("tok");
        api.clear_bearer();
        api.clear_bearer();
        let _ = api.current_user().await;

        assert_eq!(transport.requests()[0].header(HEADER_AUTHORIZATION), None);
        assert_eq!(api.bearer(), None);
    }

    #[tokio::test]
    async fn non_2xx_maps_to_api_error_with_detail() {
        let (transport, api) = client();
        transport.mock_response(
            HttpMethod::Post,
            "http://lms.test/api/auth/login",
            400,
            json!({"detail": "Invalid credentials"}),
        );

        let err = api.login("user@example.com", "wrongpass1").await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Api {
                status: 400,
                detail: Some("Invalid credentials".into())
            }
        );

        let body: serde_json::Value = serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"email": "user@example.com", "password": "wrongpass1"}));
    }

    #[tokio::test]
    async fn missing_server_is_network_error() {
        let (_, api) = client();
        let err = api.current_user().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }

    #[tokio::test]
    async fn undecodable_success_body_is_decode_error() {
        let (transport, api) = client();
        transport.mock_raw(HttpMethod::Get, "http://lms.test/api/users/me", 200, "<html>proxy</html>");
        assert!(matches!(api.current_user().await, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn resources_use_their_path() {
        let (transport, api) = client();
        transport.mock_response(
            HttpMethod::Post,
            "http://lms.test/api/departments",
            200,
            json!({"id": "d-1", "name": "Computer Science", "code": "CSE", "created_at": "2024-01-01T00:00:00Z"}),
        );

        let draft = DepartmentDraft {
            name: "Computer Science".into(),
            code: "CSE".into(),
        };
        let created: Department = api.create::<Department>(&draft).await.unwrap();
        assert_eq!(created.code, "CSE");
        assert_eq!(transport.count_for(HttpMethod::Post, "http://lms.test/api/departments"), 1);
    }

    #[test]
    fn error_detail_handles_validation_lists() {
        let body = r#"{"detail":[{"loc":["body","admin_password"],"msg":"ensure this value has at least 8 characters"},{"loc":["body","admin_email"],"msg":"value is not a valid email address"}]}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("ensure this value has at least 8 characters; value is not a valid email address")
        );
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"detail": 42}"#), None);
    }
}
