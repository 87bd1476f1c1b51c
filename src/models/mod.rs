pub mod auth;
pub mod setup;
pub mod academic;
pub mod validation;

pub use auth::{Credentials, LoginRequest, LoginResponse, Role, User};
pub use setup::{SetupRequest, SetupResponse, SetupStatus};
pub use academic::{Course, CourseDraft, Department, DepartmentDraft, Program, ProgramDraft, Resource, UserDraft};
pub use validation::Validate;
