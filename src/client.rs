//! Remote listing clients.
//!
//! [`ListClient`] is the seam between the lookups and the eCloud API: one
//! call returns every record matching a [`LookupQuery`] on a collection path.
//! [`HttpClient`] is the REST implementation; tests substitute
//! [`crate::testing::MockClient`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

use crate::config::ProviderConfig;
use crate::filter::LookupQuery;
use crate::path::CollectionPath;

const MAX_ERROR_BODY: usize = 200;

// Upper bound on records fetched by one list call; the page limit follows
// from the configured page size.
const MAX_RECORDS: u32 = 100_000;

/// Errors raised while talking to the remote API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Start of the response body.
        body: String,
    },

    /// The response could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The client could not be set up from the configuration.
    #[error("invalid client setup: {0}")]
    Setup(String),
}

/// A remote service that can list a collection filtered by equality terms.
#[async_trait]
pub trait ListClient: Send + Sync {
    /// List every record under `path` matching `query`.
    ///
    /// Implementations must return all matching records, across pages, in
    /// the order the service returned them, and must encode each path
    /// segment separately.
    async fn list(
        &self,
        path: &CollectionPath,
        query: &LookupQuery,
    ) -> Result<Vec<Value>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Vec<Value>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    total_pages: u32,
}

impl ListEnvelope {
    fn total_pages(&self) -> u32 {
        self.meta
            .as_ref()
            .and_then(|m| m.pagination.as_ref())
            .map(|p| p.total_pages)
            .unwrap_or(1)
    }
}

/// REST client for the eCloud API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: u32,
}

impl HttpClient {
    /// Build a client from the provider configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&config.api_key).map_err(|_| {
            ClientError::Setup("api_key contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(concat!("ecloud-provider/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            page_size: config.page_size,
        })
    }

    fn endpoint(&self, path: &CollectionPath) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Setup(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }

    fn max_pages(&self) -> u32 {
        MAX_RECORDS.div_ceil(self.page_size.max(1))
    }

    async fn fetch_page(
        &self,
        url: &Url,
        query: &LookupQuery,
        page: u32,
    ) -> Result<ListEnvelope, ClientError> {
        let mut params = query.to_params();
        params.push(("page".to_string(), page.to_string()));
        params.push(("per_page".to_string(), self.page_size.to_string()));

        trace!(url = %url, page, "fetching page");
        let response = self.http.get(url.clone()).query(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ListClient for HttpClient {
    async fn list(
        &self,
        path: &CollectionPath,
        query: &LookupQuery,
    ) -> Result<Vec<Value>, ClientError> {
        let url = self.endpoint(path)?;
        let max_pages = self.max_pages();
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let envelope = self.fetch_page(&url, query, page).await?;
            let total_pages = envelope.total_pages();
            if total_pages > max_pages {
                return Err(ClientError::InvalidResponse(format!(
                    "API reported {} pages, more than the limit of {}",
                    total_pages, max_pages
                )));
            }
            if envelope.data.is_empty() {
                break;
            }
            records.extend(envelope.data);

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        debug!(path = %path, pages = page, records = records.len(), "list completed");
        Ok(records)
    }
}
