/// Claves de localStorage para el par de credenciales (texto plano)
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refresh_token";

pub const MIN_PASSWORD_LENGTH: usize = 8;
