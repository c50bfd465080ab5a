pub mod api_client;
pub mod auth_service;
pub mod endpoint;
pub mod product_service;
pub mod query_client;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod gloo_transport;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use endpoint::Endpoint;
pub use product_service::ProductService;
pub use query_client::{ListenerId, QueryClient, QueryOptions, QueryResult, QueryStatus};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(target_arch = "wasm32")]
pub use gloo_transport::GlooTransport;
