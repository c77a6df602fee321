//! Collaborators the workers call out to. Implementations live outside this
//! crate (`catalog-backend-client` for HTTP); tests substitute fakes.

use async_trait::async_trait;
use catalog_protocol::TableResource;
use catalog_protocol::search::SearchRequest;
use catalog_protocol::search::SearchResponsePayload;

#[async_trait]
pub trait MetadataApi: Send + Sync {
    async fn popular_tables(&self) -> anyhow::Result<Vec<TableResource>>;
}

#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Searches a single resource. The returned payload carries the bucket
    /// of `request.resource`.
    async fn search(&self, request: SearchRequest) -> anyhow::Result<SearchResponsePayload>;
}

/// Receives the search URL whenever the search state should be reflected in
/// the address bar.
pub trait Navigation: Send + Sync {
    fn navigate(&self, url: &str, replace: bool);
}

/// Navigation sink that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigation;

impl Navigation for LogNavigation {
    fn navigate(&self, url: &str, replace: bool) {
        tracing::debug!(url, replace, "navigate");
    }
}
