// ============================================================================
// CLIENT ERROR - Taxonomía de errores del cliente
// ============================================================================

/// Error de una operación del cliente.
///
/// `Network` y `Api` se distinguen porque el mensaje mostrado al usuario
/// difiere: genérico para el primero, el `detail` del servidor para el segundo.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// No hubo respuesta del servidor
    #[error("network: {0}")]
    Network(String),

    /// El servidor respondió con un status no-2xx
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Validación de formulario, antes de cualquier request
    #[error("{0}")]
    Validation(String),

    /// Respuesta 2xx con un cuerpo inesperado
    #[error("decode: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    /// Mensaje para mostrar inline en un formulario.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            ClientError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
