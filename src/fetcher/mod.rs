mod api_client;

pub use api_client::{ApiClient, DEFAULT_BASE_URL};
