pub mod auth_viewmodel;
pub mod setup_viewmodel;
pub mod resource_viewmodel;
pub mod navigation;
pub mod app_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginForm};
pub use setup_viewmodel::{SetupForm, SetupStep, SetupViewModel, SetupWizard};
pub use resource_viewmodel::{ListState, ResourceViewModel};
pub use app_viewmodel::AppViewModel;
