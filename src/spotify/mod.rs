//! # Spotify Integration Module
//!
//! This module is the only place that talks to the Spotify Web API. It wraps
//! the client-credentials token exchange and the four read-only catalog
//! endpoints the lookup needs.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (prompts, mode selection)
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client-credentials grant)
//!     ├── Artist Operations (search, lookup, top tracks)
//!     └── Track Operations (track lookup)
//!          ↓
//! HttpTransport (reqwest blocking client)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Request Model
//!
//! Every call is blocking and sequential. The client builds an [`ApiRequest`],
//! hands it to its [`HttpTransport`], checks the status code and decodes the
//! JSON body into the records from [`crate::types`]. Non-2xx responses are
//! turned into [`Error::Api`] or [`Error::Auth`] using the message Spotify
//! puts in the error payload. There is no retry, no pagination and no token
//! reuse across runs.
//!
//! ## Testing
//!
//! The transport is a trait so the whole request sequence can be exercised
//! against canned responses without network access.

use std::time::Duration;

use reqwest::{
    Method,
    blocking::Client,
    header::{HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::{
    Error, Res,
    config::{Credentials, SpotifyConfig},
    types::{AccessToken, ApiErrorBody},
};

pub mod artists;
pub mod auth;
pub mod tracks;

pub use auth::{basic_auth_header, bearer_auth_header};

/// A single HTTP request as seen by the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        ApiRequest {
            method: Method::GET,
            url: url.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            form: Vec::new(),
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        ApiRequest {
            method: Method::POST,
            ..Self::get(url)
        }
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn form(mut self, key: &str, value: impl Into<String>) -> Self {
        self.form.push((key.to_string(), value.into()));
        self
    }

    /// Returns the value of a header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Status code and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        ApiResponse {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the Spotify services.
///
/// Implementations only move bytes: status checks and JSON decoding are done
/// by [`SpotifyClient`]. Transport failures (DNS, TLS, timeouts) are reported
/// as [`Error::Http`].
pub trait HttpTransport {
    fn send(&self, request: &ApiRequest) -> Res<ApiResponse>;
}

/// Production transport backed by a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests fail once `timeout` elapses.
    pub fn new(timeout: Duration) -> Res<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(ReqwestTransport { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &ApiRequest) -> Res<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .query(&request.query);
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.headers(request.headers.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(ApiResponse { status, body })
    }
}

/// Spotify Web API client.
///
/// Holds the endpoint configuration, the application credentials and the
/// transport. The operations themselves live in the [`auth`], [`artists`]
/// and [`tracks`] submodules.
pub struct SpotifyClient<T = ReqwestTransport> {
    transport: T,
    config: SpotifyConfig,
    credentials: Credentials,
}

impl SpotifyClient<ReqwestTransport> {
    /// Builds a client with the `reqwest` transport from explicit settings.
    pub fn with_config(config: SpotifyConfig, credentials: Credentials) -> Res<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(SpotifyClient::new(config, credentials, transport))
    }

    /// Builds a client from the process environment.
    ///
    /// See [`SpotifyConfig::from_env`] and [`Credentials::from_env`] for the
    /// variables that are read.
    pub fn from_env() -> Res<Self> {
        Self::with_config(SpotifyConfig::from_env()?, Credentials::from_env())
    }
}

impl<T: HttpTransport> SpotifyClient<T> {
    pub fn new(config: SpotifyConfig, credentials: Credentials, transport: T) -> Self {
        SpotifyClient {
            transport,
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues an authenticated GET against `{api_url}{path}` and decodes the
    /// JSON body.
    pub(crate) fn get_json<R: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> Res<R> {
        let mut request = ApiRequest::get(format!("{}{}", self.config.api_url, path))
            .headers(bearer_auth_header(token)?);
        for (key, value) in query {
            request = request.query(key, *value);
        }

        log::debug!("{} {} {:?}", request.method, request.url, request.query);
        let response = self.transport.send(&request)?;
        if !response.is_success() {
            return Err(api_error(&response));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

fn api_error(response: &ApiResponse) -> Error {
    let message = match serde_json::from_str::<ApiErrorBody>(&response.body) {
        Ok(body) => body.error.message,
        Err(_) => response.body.trim().to_string(),
    };

    Error::Api {
        status: response.status,
        message,
    }
}

/// Builds a header map holding a single `Authorization` value.
pub(crate) fn authorization(value: &str) -> Res<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut value = HeaderValue::from_str(value)?;
    value.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, value);
    Ok(headers)
}
