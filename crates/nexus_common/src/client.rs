//! HTTP transport for the Nexus API
//!
//! `NexusTransport` is the seam between the fetch logic and the network.
//! `HttpNexusClient` is the real blocking implementation; `FakeTransport`
//! serves canned responses and records every path requested.

use crate::config::ApiConfig;
use crate::error::NexusError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::sync::Mutex;
use std::time::Duration;

/// Raw response: status code plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET a path relative to the API root
pub trait NexusTransport {
    /// Full URL for `path`, used in diagnostics
    fn url_for(&self, path: &str) -> String;

    /// Issue the request. Only transport failures are errors; any HTTP
    /// status, including 4xx/5xx, comes back as an `ApiResponse`.
    fn get(&self, path: &str) -> Result<ApiResponse, NexusError>;
}

/// Blocking client sending `apikey`, `Accept` and `User-Agent` on every call
pub struct HttpNexusClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl HttpNexusClient {
    pub fn new(config: &ApiConfig, api_key: &str) -> Result<Self, NexusError> {
        let headers = build_headers(api_key, &config.user_agent())?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| NexusError::Client(e.to_string()))?;

        Ok(Self {
            base_url: config.api_root().to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }
}

impl NexusTransport for HttpNexusClient {
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> Result<ApiResponse, NexusError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                NexusError::Timeout {
                    url: url.clone(),
                    secs: self.timeout_secs,
                }
            } else {
                NexusError::Request {
                    url: url.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| NexusError::Request {
            url: url.clone(),
            message: format!("Failed to read response body: {}", e),
        })?;

        tracing::debug!("{} -> HTTP {} ({} bytes)", url, status, body.len());
        Ok(ApiResponse { status, body })
    }
}

fn build_headers(api_key: &str, user_agent: &str) -> Result<HeaderMap, NexusError> {
    let mut headers = HeaderMap::new();

    let mut key = HeaderValue::from_str(api_key).map_err(|_| NexusError::InvalidApiKey)?;
    key.set_sensitive(true);
    headers.insert("apikey", key);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("nexuscat")),
    );

    Ok(headers)
}

/// Transport serving canned responses keyed by path
pub struct FakeTransport {
    routes: Vec<(String, Result<ApiResponse, String>)>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `path` with `status` and `body`
    pub fn respond(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .push((path.to_string(), Ok(ApiResponse::new(status, body))));
        self
    }

    /// Fail `path` at the transport level (connection refused and the like)
    pub fn fail(mut self, path: &str, message: &str) -> Self {
        self.routes.push((path.to_string(), Err(message.to_string())));
        self
    }

    /// Paths requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls().iter().filter(|p| p.as_str() == path).count()
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl NexusTransport for FakeTransport {
    fn url_for(&self, path: &str) -> String {
        format!("fake://{}", path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> Result<ApiResponse, NexusError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_string());
        }

        match self.routes.iter().find(|(p, _)| p == path) {
            Some((_, Ok(response))) => Ok(response.clone()),
            Some((_, Err(message))) => Err(NexusError::Request {
                url: self.url_for(path),
                message: message.clone(),
            }),
            None => Ok(ApiResponse::new(404, "Not Found")),
        }
    }
}
