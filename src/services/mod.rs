pub mod error;
pub mod http;
pub mod api_client;

pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use api_client::ApiClient;
