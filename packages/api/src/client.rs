//! # HTTP adapter
//!
//! [`Backend`] is the four-verb JSON surface the rest of the dashboard talks to.
//! [`HttpBackend`] implements it with `reqwest`, which runs natively and, on
//! `wasm32`, on top of the browser's `fetch`.
//!
//! Every request carries `Content-Type: application/json` and, when the injected
//! [`CredentialProvider`] has one, `Authorization: Bearer <token>`. A 401 response
//! clears the stored token; nothing else (no redirect) happens here.
//!
//! Write responses are optional: an empty body, or one that does not decode as the
//! entity, comes back as `Ok(None)` so the caller can refetch instead.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::CredentialProvider;
use crate::error::{ApiError, ErrorBody};

/// Async JSON CRUD surface of the content backend.
pub trait Backend {
    fn get<T>(&self, path: &str) -> impl Future<Output = Result<Vec<T>, ApiError>>
    where
        T: DeserializeOwned;

    fn post<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<Option<T>, ApiError>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned;

    fn put<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<Option<T>, ApiError>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned;

    fn delete(&self, path: &str) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`Backend`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend<C> {
    client: reqwest::Client,
    base_url: String,
    credentials: C,
}

impl<C: CredentialProvider> HttpBackend<C> {
    pub fn new(base_url: impl Into<String>, credentials: C) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn with_body<B: Serialize + ?Sized>(
        request: RequestBuilder,
        body: &B,
    ) -> Result<RequestBuilder, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(request.body(payload))
    }

    /// Send a request and return the body of a successful response.
    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<String, ApiError> {
        tracing::debug!(%method, path, "backend request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "backend unreachable");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "response body interrupted");
            ApiError::Network(e.to_string())
        })?;

        if status.is_success() {
            return Ok(text);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "authorization rejected, clearing stored token");
            self.credentials.clear();
        } else {
            tracing::warn!(%method, path, status = status.as_u16(), "backend returned error status");
        }

        Err(ApiError::http(status.as_u16(), ErrorBody::parse(&text)))
    }
}

fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ApiError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<T>>>(text)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_entity<T: DeserializeOwned>(path: &str, text: &str) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Option<T>>(text) {
        Ok(entity) => entity,
        Err(e) => {
            tracing::debug!(path, error = %e, "write response is not an entity");
            None
        }
    }
}

impl<C: CredentialProvider> Backend for HttpBackend<C> {
    async fn get<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let text = self
            .execute(Method::GET, path, self.request(Method::GET, path))
            .await?;
        decode_list(&text)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Self::with_body(self.request(Method::POST, path), body)?;
        let text = self.execute(Method::POST, path, request).await?;
        Ok(decode_entity(path, &text))
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Self::with_body(self.request(Method::PUT, path), body)?;
        let text = self.execute(Method::PUT, path, request).await?;
        Ok(decode_entity(path, &text))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }
}
