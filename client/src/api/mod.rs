//! HTTP client for the Training Diary API
//!
//! Single point of outbound communication with the remote API: attaches the
//! bearer token, (de)serializes JSON, and normalizes non-2xx responses into
//! [`ClientError::RequestFailed`]. Domain operations live in the `users`,
//! `exercises`, and `trainings` submodules.
//!
//! No retry, no timeout, no backoff: each call is one independent request
//! whose latency is bounded only by the transport.

pub mod exercises;
pub mod trainings;
pub mod users;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Fixed prefix appended to the configured host for every request
const API_PREFIX: &str = "/api/v1";

/// Typed HTTP client for the Training Diary API
///
/// Holds the bearer token exclusively; it is never exposed through the
/// public API. All methods take `&self`, so the client can be shared behind
/// an `Arc` between the auth store and direct callers.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
}

impl ApiClient {
    /// Create a client for the configured API host
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    /// Replace the held bearer token unconditionally
    ///
    /// An empty string clears the token; subsequent requests then omit the
    /// `Authorization` header entirely (this is how logout drops auth).
    pub fn set_token(&self, token: &str) {
        let mut guard = self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = if token.is_empty() {
            None
        } else {
            Some(SecretString::new(token.to_string()))
        };
    }

    /// Generic request underlying all domain operations
    ///
    /// `endpoint` is appended to `<base_url>/api/v1`. Default headers
    /// (`Content-Type: application/json`, `Authorization` when a token is
    /// held) are merged with `extra_headers`, the latter winning on
    /// conflict. Success bodies are parsed as JSON into `T`; the server's
    /// shape is trusted beyond what typed deserialization enforces.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_headers: HeaderMap,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .send(method, endpoint, body, extra_headers, None::<&()>)
            .await?;
        Ok(response.json::<T>().await?)
    }

    fn default_headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = guard.as_ref() {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn send<B, Q>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_headers: HeaderMap,
        query: Option<&Q>,
    ) -> ClientResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, endpoint);

        let mut headers = self.default_headers()?;
        // Caller-supplied headers win on conflict
        headers.extend(extra_headers);

        debug!(method = %method, url = %url, "sending API request");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, url = %url, "API request failed");
            return Err(ClientError::RequestFailed { status });
        }

        Ok(response)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        self.request(Method::GET, endpoint, None::<&()>, HeaderMap::new())
            .await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, endpoint: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .send(Method::GET, endpoint, None::<&()>, HeaderMap::new(), Some(query))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body), HeaderMap::new())
            .await
    }

    pub(crate) async fn put<T, B>(&self, endpoint: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body), HeaderMap::new())
            .await
    }

    /// DELETE with the response body discarded; success is the absence of
    /// an error
    pub(crate) async fn delete(&self, endpoint: &str) -> ClientResult<()> {
        self.send(
            Method::DELETE,
            endpoint,
            None::<&()>,
            HeaderMap::new(),
            None::<&()>,
        )
        .await
        .map(drop)
    }
}
