use reqwest::Client;
use url::Url;

use crate::config::CONFIG;
use crate::error::Result;
use crate::models::SearchResponse;

pub const SEARCH_PATH: &str = "/search/";

/// Anything that can answer a search query with a `SearchResponse` payload.
pub trait SearchBackend {
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResponse>> + Send;
}

/// Talks to the search backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    http: Client,
    search_url: Url,
}

impl HttpSearchClient {
    /// `endpoint` is the backend base URL; `/search/` is resolved against it.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: &str) -> Result<Self> {
        let search_url = Url::parse(endpoint)?.join(SEARCH_PATH)?;
        Ok(Self { http, search_url })
    }

    /// Create a client using environment configuration
    pub fn from_config() -> Result<Self> {
        Self::new(&CONFIG.search_endpoint)
    }

    /// Full request URL for `query`, percent-encoded as a single component.
    pub fn request_url(&self, query: &str) -> String {
        format!("{}?q={}", self.search_url, urlencoding::encode(query))
    }
}

impl SearchBackend for HttpSearchClient {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.request_url(query);
        log::info!("searching: {url}");

        // The status code is not inspected: a failing backend still answers
        // with a JSON `error` field, anything else is a parse failure.
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        log::debug!("search response: status {status}, {} bytes", body.len());

        let payload: SearchResponse = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}
