//! Typed client for the content API.
//!
//! Authentication rides on the session cookie set by `/auth/login`, so one
//! [`ApiClient`] (and its clones) must be used for the whole session.

mod auth;
mod content;
mod media;
mod site;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use pagewright_api_types::ErrorBody;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::session::SessionExpiredHandler;
use crate::config::ApiSettings;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("failed to parse response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Server { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            Self::Url(_) | Self::Decode(_) => None,
        }
    }
}

/// Paging and filter parameters accepted by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(status) = self.status.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.clone()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Whether a 401 on this request ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnUnauthorized {
    Expire,
    Ignore,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
    on_expired: Option<Arc<dyn SessionExpiredHandler>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_str())
            .field("expiry_handler", &self.on_expired.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client for the API served under `{site}/api/`.
    pub fn new(site: &str) -> Result<Self, ApiError> {
        Self::build(site, None)
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        Self::build(settings.base_url.as_str(), settings.timeout)
    }

    fn build(site: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base = api_base(site)?;
        let mut builder = Client::builder()
            .user_agent(Self::user_agent())
            .cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
            on_expired: None,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("pagewright/", env!("CARGO_PKG_VERSION"))
    }

    /// Notify `handler` whenever the API answers 401, except for login.
    #[must_use]
    pub fn with_session_expired_handler(mut self, handler: Arc<dyn SessionExpiredHandler>) -> Self {
        self.on_expired = Some(handler);
        self
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        self.request_with_query(method, path, &[])
    }

    fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<RequestBuilder, ApiError> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        debug!(%method, %url, "api request");
        Ok(self.client.request(method, url))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request_with_query(Method::GET, path, query)?;
        let response = self.execute(request, OnUnauthorized::Expire).await?;
        decode(response).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(method, path)?.json(body);
        let response = self.execute(request, OnUnauthorized::Expire).await?;
        decode(response).await
    }

    async fn send_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let request = self.request(method, path)?;
        self.execute(request, OnUnauthorized::Expire).await?;
        Ok(())
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        on_unauthorized: OnUnauthorized,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && on_unauthorized == OnUnauthorized::Expire {
            if let Some(handler) = &self.on_expired {
                warn!(url = %response.url(), "session rejected by the API");
                handler.session_expired();
            }
            return Err(ApiError::Unauthorized);
        }

        let bytes = response.bytes().await?;
        Err(ApiError::Server {
            status: status.as_u16(),
            message: error_message(status, &bytes),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ApiError::Decode)
}

/// `{error}` from a JSON error body, else the raw text, else the reason phrase.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if !parsed.error.is_empty() {
            return parsed.error;
        }
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

fn api_base(site: &str) -> Result<Url, ApiError> {
    let mut base = Url::parse(site)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("api/")?)
}
