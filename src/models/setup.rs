use serde::{Deserialize, Serialize};

use crate::models::auth::{Credentials, User};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStatus {
    pub is_setup_complete: bool,
    #[serde(default)]
    pub setup_step: i32,
}

impl SetupStatus {
    /// Estado asumido cuando la consulta falla (nunca se asume setup hecho)
    pub fn unknown() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetupRequest {
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub institute_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetupResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl SetupResponse {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.access_token.clone(), self.refresh_token.clone())
    }
}
