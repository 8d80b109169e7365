//! Where listing pages come from.
//!
//! [`UpstreamClient`] speaks the remote content API's pagination dialect and
//! backs the `/api/ideas` proxy route. [`ProxyClient`] talks to that proxy
//! route over HTTP. Both implement [`IdeasSource`], which is what
//! [`PostsFetcher`](super::PostsFetcher) depends on.

use async_trait::async_trait;
use axum::body::Bytes;
use serde::de::IgnoredAny;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::ideas::model::IdeasResponse;
use crate::ideas::query::{ListQuery, PAGE_PARAM, PER_PAGE_PARAM, SORT_PARAM};

/// Image variants the remote API is asked to embed in every item.
const APPENDED_IMAGES: [&str; 2] = ["small_image", "medium_image"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A source of listing pages.
#[async_trait]
pub trait IdeasSource: Send + Sync {
    /// Fetch one page of ideas.
    async fn fetch_ideas(&self, query: &ListQuery) -> Result<IdeasResponse, FetchError>;
}

fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
    Url::parse(endpoint).map_err(|source| FetchError::InvalidUrl {
        url: endpoint.to_string(),
        source,
    })
}

/// GET `url` and return the raw body, treating non-2xx as failure.
async fn get_body(client: &reqwest::Client, url: Url) -> Result<Bytes, FetchError> {
    debug!(url = %url, "Fetching ideas");
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.bytes().await.map_err(FetchError::Body)
}

/// GET `url` and decode the body as an ideas page.
async fn get_ideas(client: &reqwest::Client, url: Url) -> Result<IdeasResponse, FetchError> {
    let body = get_body(client, url).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Client for the remote content API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl UpstreamClient {
    /// Create a client for the ideas endpoint at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn new(client: reqwest::Client, endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    /// The upstream URL for `query`.
    #[must_use]
    pub fn request_url(&self, query: &ListQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("page[number]", &query.page.to_string())
                .append_pair("page[size]", &query.per_page.to_string());
            for image in APPENDED_IMAGES {
                pairs.append_pair("append[]", image);
            }
            pairs.append_pair("sort", query.sort.upstream_sort());
        }
        url
    }

    /// Fetch one page and return the body untouched.
    ///
    /// The body is checked to be JSON but is not otherwise interpreted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-2xx
    /// status, or the body is not JSON.
    pub async fn fetch_raw(&self, query: &ListQuery) -> Result<Bytes, FetchError> {
        let body = get_body(&self.client, self.request_url(query)).await?;
        serde_json::from_slice::<IgnoredAny>(&body)?;
        Ok(body)
    }
}

#[async_trait]
impl IdeasSource for UpstreamClient {
    async fn fetch_ideas(&self, query: &ListQuery) -> Result<IdeasResponse, FetchError> {
        get_ideas(&self.client, self.request_url(query)).await
    }
}

/// Client for an `/api/ideas` proxy endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ProxyClient {
    /// Create a client for the proxy route at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn new(client: reqwest::Client, endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    #[must_use]
    pub fn request_url(&self, query: &ListQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(PAGE_PARAM, &query.page.to_string())
            .append_pair(PER_PAGE_PARAM, &query.per_page.to_string())
            .append_pair(SORT_PARAM, query.sort.as_str());
        url
    }
}

#[async_trait]
impl IdeasSource for ProxyClient {
    async fn fetch_ideas(&self, query: &ListQuery) -> Result<IdeasResponse, FetchError> {
        get_ideas(&self.client, self.request_url(query)).await
    }
}
