//! Engine traits and types

use crate::config::EngineConfig;
use crate::results::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of an engine search
#[derive(Debug, Clone, Default)]
pub struct EngineResults {
    /// Search results
    pub results: Vec<Result>,
}

impl EngineResults {
    pub fn with_results(results: Vec<Result>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Parameters for building a search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParams {
    /// Search query string
    pub query: String,
    /// Preferred language; engines fall back to their configured locale
    pub lang: Option<String>,
    /// Category context
    pub category: String,
}

impl RequestParams {
    /// Create new request parameters
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            lang: None,
            category: "general".to_string(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// HTTP request to be made by the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// POST body data
    pub data: Option<RequestBody>,
}

impl EngineRequest {
    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: HashMap::new(),
            data: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add form data (sent as form-urlencoded)
    pub fn form(mut self, data: HashMap<String, String>) -> Self {
        self.data = Some(RequestBody::Form(data));
        self
    }

    /// Check whether a header is set, ignoring case
    pub fn has_header(&self, key: &str) -> bool {
        self.headers.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    /// Get a header value, ignoring case
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Get a form field from the body
    pub fn form_value(&self, key: &str) -> Option<&str> {
        match &self.data {
            Some(RequestBody::Form(data)) => data.get(key).map(|v| v.as_str()),
            None => None,
        }
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

/// Request body types
#[derive(Debug, Clone)]
pub enum RequestBody {
    Form(HashMap<String, String>),
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Build a 200 response around a body, mostly useful for tests
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            text: text.into(),
            url: String::new(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Main engine trait that all search engines must implement
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Default timeout in seconds
    fn timeout(&self) -> f64 {
        5.0
    }

    /// Build the HTTP request for a search
    fn request(&self, params: &RequestParams) -> anyhow::Result<EngineRequest>;

    /// Parse the HTTP response into results. `params` are the ones the
    /// request was built from.
    fn response(
        &self,
        response: EngineResponse,
        params: &RequestParams,
    ) -> anyhow::Result<EngineResults>;

    /// Optional initialization (called once on startup)
    fn init(&mut self, _config: &EngineConfig) -> anyhow::Result<()> {
        Ok(())
    }

    /// Optional validation of configuration
    fn validate(&self, _config: &EngineConfig) -> anyhow::Result<()> {
        Ok(())
    }
}
