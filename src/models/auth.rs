use serde::{Deserialize, Serialize};

/// Rol del usuario tal como lo envía el backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "TEACHER" => Some(Role::Teacher),
            "STUDENT" => Some(Role::Student),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dept_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Par de credenciales persistido por el SessionStore
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Credentials {
    pub access: String,
    pub refresh: String,
}

impl Credentials {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

impl LoginResponse {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.access_token.clone(), self.refresh_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_backend_payload() {
        let body = r#"{
            "id": "u-1",
            "name": "Ada Admin",
            "email": "ada@example.edu",
            "role": "SUPER_ADMIN",
            "phone": null,
            "dept_id": null,
            "status": "active",
            "last_login_at": null,
            "mfa_enabled": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.role, Role::SuperAdmin);
        assert_eq!(user.status.as_deref(), Some("active"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let body = r#"{"id":"u","name":"X","email":"x@y.z","role":"JANITOR"}"#;
        assert!(serde_json::from_str::<User>(body).is_err());
        assert_eq!(Role::parse("TEACHER"), Some(Role::Teacher));
        assert_eq!(Role::parse("teacher"), None);
    }
}
