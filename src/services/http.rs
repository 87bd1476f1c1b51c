// ============================================================================
// HTTP TRANSPORT - Abstracción del transporte HTTP
// ============================================================================
// El ApiClient habla con este trait; en el navegador la implementación es
// `FetchTransport` (gloo-net), en los tests un mock que registra requests.
// ============================================================================

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::services::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Transporte HTTP. `?Send` porque los futures de wasm no son Send.
///
/// Solo devuelve `ClientError::Network` cuando no hay respuesta; cualquier
/// status (incluido 4xx/5xx) llega como `Ok(HttpResponse)`.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use gloo_net::http::Request;

    use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
    use crate::services::error::ClientError;

    /// Transporte del navegador basado en `fetch` (gloo-net)
    #[derive(Clone, Default)]
    pub struct FetchTransport;

    #[async_trait::async_trait(?Send)]
    impl HttpTransport for FetchTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            };
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }

            let sent = match request.body {
                Some(body) => builder
                    .body(body)
                    .map_err(|e| ClientError::Network(format!("Request build error: {}", e)))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let response = sent.map_err(|e| ClientError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ClientError::Decode(format!("Body read error: {}", e)))?;

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(test)]
pub use mock::MockTransport;
