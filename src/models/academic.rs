// ============================================================================
// ACADEMIC MODELS - Recursos de gestión (departamentos, programas, cursos, usuarios)
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::auth::{Role, User};
use crate::models::validation::{
    require_email, require_length, require_range, require_strong_password, Validate,
};
use crate::services::error::ClientError;

/// Recurso REST con listado (GET) y alta (POST) sobre la misma ruta
pub trait Resource: DeserializeOwned + Clone + 'static {
    /// Ruta relativa a la base de la API
    const PATH: &'static str;
    const LABEL: &'static str;

    type Draft: Serialize + Validate + Trimmed;

    fn id(&self) -> &str;
}

/// Copia con espacios recortados, tal como debe viajar al backend
pub trait Trimmed {
    fn trimmed(&self) -> Self;
}

fn trim_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub name: String,
    pub code: String,
}

impl Validate for DepartmentDraft {
    fn validate(&self) -> Result<(), ClientError> {
        require_length("Name", &self.name, 2, 100)?;
        require_length("Code", &self.code, 2, 20)
    }
}

impl Trimmed for DepartmentDraft {
    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }
}

impl Resource for Department {
    const PATH: &'static str = "/departments";
    const LABEL: &'static str = "Departments";
    type Draft = DepartmentDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub dept_id: String,
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramDraft {
    pub dept_id: String,
    pub name: String,
    pub code: String,
}

impl Validate for ProgramDraft {
    fn validate(&self) -> Result<(), ClientError> {
        if self.dept_id.trim().is_empty() {
            return Err(ClientError::validation("Please select a department"));
        }
        require_length("Name", &self.name, 2, 100)?;
        require_length("Code", &self.code, 2, 20)
    }
}

impl Trimmed for ProgramDraft {
    fn trimmed(&self) -> Self {
        Self {
            dept_id: self.dept_id.trim().to_string(),
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }
}

impl Resource for Program {
    const PATH: &'static str = "/programs";
    const LABEL: &'static str = "Programs";
    type Draft = ProgramDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub program_id: String,
    pub name: String,
    pub code: String,
    pub semester: u8,
    pub batch_year: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub program_id: String,
    pub name: String,
    pub code: String,
    pub semester: u8,
    pub batch_year: u16,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            program_id: String::new(),
            name: String::new(),
            code: String::new(),
            semester: 1,
            batch_year: 2024,
        }
    }
}

impl Validate for CourseDraft {
    fn validate(&self) -> Result<(), ClientError> {
        if self.program_id.trim().is_empty() {
            return Err(ClientError::validation("Please select a program"));
        }
        require_length("Name", &self.name, 2, 100)?;
        require_length("Code", &self.code, 2, 20)?;
        require_range("Semester", i64::from(self.semester), 1, Some(10))?;
        require_range("Batch year", i64::from(self.batch_year), 2020, None)
    }
}

impl Trimmed for CourseDraft {
    fn trimmed(&self) -> Self {
        Self {
            program_id: self.program_id.trim().to_string(),
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            ..self.clone()
        }
    }
}

impl Resource for Course {
    const PATH: &'static str = "/courses";
    const LABEL: &'static str = "Courses";
    type Draft = CourseDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Student,
            password: String::new(),
            phone: None,
            dept_id: None,
        }
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> Result<(), ClientError> {
        require_length("Name", &self.name, 2, 100)?;
        require_email(&self.email)?;
        require_strong_password(&self.password)
    }
}

// La contraseña viaja tal cual
impl Trimmed for UserDraft {
    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            password: self.password.clone(),
            phone: trim_optional(&self.phone),
            dept_id: trim_optional(&self.dept_id),
        }
    }
}

impl Resource for User {
    const PATH: &'static str = "/users";
    const LABEL: &'static str = "Users";
    type Draft = UserDraft;

    fn id(&self) -> &str {
        &self.id
    }
}
