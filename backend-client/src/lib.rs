mod client;
mod error;

pub use client::BackendClient;
pub use client::POPULAR_TABLES_ENDPOINT;
pub use client::SEARCH_ENDPOINT;
pub use error::ClientError;
