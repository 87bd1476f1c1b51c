pub mod app;
pub mod forms;
pub mod login;
pub mod setup;
pub mod dashboard;
pub mod resources;

pub use app::render_app;
