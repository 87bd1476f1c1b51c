use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub api_prefix: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("API_PREFIX"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        api_prefix: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.backend_url),
            api_prefix: api_prefix
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.api_prefix),
            environment: environment
                .map(|s| s.trim().to_lowercase())
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Base de todas las rutas REST: `{backend_url}{api_prefix}` sin barra final
    pub fn api_base_url(&self) -> String {
        let origin = self.backend_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            origin.to_string()
        } else {
            format!("{}/{}", origin, prefix)
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url(), "http://localhost:8001/api");
    }

    #[test]
    fn api_base_url_normalises_slashes() {
        let config = AppConfig::from_values(
            Some("https://lms.example.edu/"),
            Some("/api/"),
            Some("Production"),
            Some("false"),
        );
        assert_eq!(config.api_base_url(), "https://lms.example.edu/api");
        assert_eq!(config.environment, "production");
        assert!(!config.is_logging_enabled());
    }

    #[test]
    fn empty_prefix_uses_bare_origin() {
        let config = AppConfig::from_values(Some("http://10.0.0.2:8001"), Some(""), None, Some("yes"));
        assert_eq!(config.api_base_url(), "http://10.0.0.2:8001");
        // unparseable flag keeps the default
        assert!(config.is_logging_enabled());
    }
}
