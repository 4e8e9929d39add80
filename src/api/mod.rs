//! REST client for the HealCheck backend.
//!
//! [`ApiClient`] owns the HTTP plumbing: URL building from the configured base, the bearer
//! header, the per-request timeout and the result contract. Resource specific calls live in
//! the [`user`], [`image`] and [`stats`] facades, which borrow the client the same way for every
//! call and convert wire DTOs into canonical records before returning.
//!
//! # Result contract
//! - 2xx: the body parsed as JSON, or nothing for empty bodies
//! - non-2xx: [`ApiError`] with the `message` of the error body when present
//! - transport failure: [`NetworkError`]
//! - 2xx with an undecodable body: [`Error::InvalidResponse`]

pub mod image;
pub mod stats;
pub mod user;

use std::sync::{Arc, RwLock};

use dioxus_logger::tracing;
use reqwest::{multipart::Form, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    error::{ApiError, Error, NetworkError},
    model::api::ErrorDto,
};

pub use image::ImageApi;
pub use stats::StatsApi;
pub use user::UserApi;

/// HTTP client shared by every page.
///
/// Clones share the bearer token, so logging in through one clone authorizes all of them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(NetworkError::from)?;

        Ok(Self {
            http,
            config: config.clone(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Set or clear the bearer token attached to every request
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Start a request for `path` with the base URL, timeout and bearer header applied
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint_url(path);

        let mut builder = self
            .http
            .request(method, url)
            .timeout(self.config.request_timeout());

        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    /// Send a prepared request and return the raw body of a 2xx response.
    ///
    /// Non-2xx responses become [`ApiError`], transport failures [`NetworkError`].
    pub async fn execute(&self, builder: RequestBuilder, path: &str) -> Result<String, Error> {
        let response = builder.send().await.map_err(|e| {
            tracing::debug!("Request to {} failed before a response: {}", path, e);
            NetworkError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(NetworkError::from)?;

        if status.is_success() {
            tracing::debug!("{} answered {}", path, status.as_u16());
            return Ok(body);
        }

        let message = serde_json::from_str::<ErrorDto>(&body)
            .ok()
            .and_then(ErrorDto::into_message);

        tracing::debug!(
            "{} rejected with {}: {}",
            path,
            status.as_u16(),
            message.as_deref().unwrap_or("no message")
        );

        Err(ApiError::new(status.as_u16(), message).into())
    }

    /// `GET` a JSON document
    pub async fn get_json<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::GET, path), path).await?;
        decode(path, &body)
    }

    /// Send a JSON body and decode the response if there is one.
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<Option<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).json(payload);
        let body = self.execute(builder, path).await?;
        decode_optional(path, &body)
    }

    /// Send a multipart form and decode the JSON response
    pub async fn send_multipart<T>(&self, path: &str, form: Form) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).multipart(form);
        let body = self.execute(builder, path).await?;
        decode(path, &body)
    }

    /// `DELETE` a resource; any 2xx counts as success regardless of body.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute(self.request(Method::DELETE, path), path)
            .await
            .map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::InvalidResponse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn decode_optional<T: DeserializeOwned>(path: &str, body: &str) -> Result<Option<T>, Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    decode(path, body).map(Some)
}
