use std::time::Duration;

use async_trait::async_trait;
use catalog_core::Config;
use catalog_core::api::MetadataApi;
use catalog_core::api::SearchApi;
use catalog_protocol::TableResource;
use catalog_protocol::popular_tables::PopularTablesResponse;
use catalog_protocol::search::SearchRequest;
use catalog_protocol::search::SearchResponsePayload;
use reqwest::Response;
use tracing::debug;
use url::Url;

use crate::error::ClientError;

pub const POPULAR_TABLES_ENDPOINT: &str = "/api/metadata/v0/popular_tables";
pub const SEARCH_ENDPOINT: &str = "/api/search/v1/search";

/// HTTP client for the catalog frontend API.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.backend.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_popular_tables(&self) -> Result<Vec<TableResource>, ClientError> {
        let url = format!("{}{POPULAR_TABLES_ENDPOINT}", self.base_url);
        debug!(%url, "fetching popular tables");
        let resp = self.http.get(url).send().await?;
        let body: PopularTablesResponse = check_status("popular tables", resp).await?.json().await?;
        Ok(body.results)
    }

    pub async fn search_resource(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponsePayload, ClientError> {
        let url = format!("{}{SEARCH_ENDPOINT}", self.base_url);
        debug!(
            %url,
            resource = %request.resource,
            page_index = request.page_index,
            "searching"
        );
        let resp = self.http.post(url).json(request).send().await?;
        Ok(check_status("search", resp).await?.json().await?)
    }
}

async fn check_status(endpoint: &'static str, resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status {
        endpoint,
        status,
        body,
    })
}

#[async_trait]
impl MetadataApi for BackendClient {
    async fn popular_tables(&self) -> anyhow::Result<Vec<TableResource>> {
        Ok(self.fetch_popular_tables().await?)
    }
}

#[async_trait]
impl SearchApi for BackendClient {
    async fn search(&self, request: SearchRequest) -> anyhow::Result<SearchResponsePayload> {
        Ok(self.search_resource(&request).await?)
    }
}
