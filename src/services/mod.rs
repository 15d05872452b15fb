//! HTTP service wrapping the library backend
//!
//! Every method maps to exactly one request. Nothing is cached, retried or
//! batched; errors reach the caller unmodified.

pub mod books;
pub mod checkouts;
pub mod dashboard;
pub mod ids;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::{ApiConfig, BookIdStrategy},
    error::{ClientError, ClientResult},
};

/// Decoded response together with its HTTP status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Client for the library REST API, bound to one base URL
#[derive(Debug, Clone)]
pub struct LibraryService {
    client: Client,
    base_url: Url,
    book_ids: BookIdStrategy,
}

impl LibraryService {
    /// Create a service from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            book_ids: config.book_ids,
        })
    }

    /// Create a service with default settings against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    pub fn with_book_ids(mut self, strategy: BookIdStrategy) -> Self {
        self.book_ids = strategy;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        Ok(self.client.request(method, self.url(segments)?))
    }

    /// Send a request and decode its JSON body
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<ApiResponse<T>> {
        let (status, url, bytes) = self.fetch_bytes(request).await?;
        let data = decode(&url, &bytes)?;

        Ok(ApiResponse { status, data })
    }

    /// Send a mutation whose response may carry no entity.
    ///
    /// `204 No Content` or an empty 2xx body yields `None`.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<ApiResponse<Option<T>>> {
        let (status, url, bytes) = self.fetch_bytes(request).await?;

        if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!(%url, %status, "Response has no body");
            return Ok(ApiResponse { status, data: None });
        }

        let data = decode(&url, &bytes)?;
        Ok(ApiResponse {
            status,
            data: Some(data),
        })
    }

    async fn fetch_bytes(&self, request: RequestBuilder) -> ClientResult<(StatusCode, String, Vec<u8>)> {
        let response = self.dispatch(request).await?;
        let status = response.status();
        let url = response.url().to_string();
        let bytes = response.bytes().await?.to_vec();
        Ok((status, url, bytes))
    }

    /// Send a request whose response body is not needed
    async fn fetch_empty(&self, request: RequestBuilder) -> ClientResult<ApiResponse<()>> {
        let response = self.dispatch(request).await?;
        Ok(ApiResponse {
            status: response.status(),
            data: (),
        })
    }

    async fn dispatch(&self, request: RequestBuilder) -> ClientResult<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();

        tracing::debug!(%method, %url, "Sending request");

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(%method, %url, "Request failed: {}", e);
            ClientError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, %url, %status, "Backend returned an error status");
            return Err(ClientError::Status { status, url, body });
        }

        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(url: &str, bytes: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(bytes).map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}
