//! HTTP client for making requests to search engines

use super::user_agent::{accept_html, accept_language, searx_useragent};
use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse, HttpMethod, RequestBody};
use anyhow::Result;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper configured from the outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(settings.request_timeout()?)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: searx_useragent(settings.useragent_suffix.as_deref()),
        })
    }

    /// Execute an engine request with custom timeout
    pub async fn execute_with_timeout(
        &self,
        request: EngineRequest,
        timeout: Duration,
    ) -> Result<EngineResponse> {
        let mut req_builder = match request.method {
            HttpMethod::Post => self.client.post(&request.url),
        };

        debug!("{:?} {}", request.method, request.url);
        req_builder = req_builder.timeout(timeout);

        // reqwest appends repeated headers, so defaults yield to the engine's own
        for (key, value) in self.default_headers() {
            if !request.has_header(key) {
                req_builder = req_builder.header(key, value);
            }
        }

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.data {
            req_builder = match body {
                RequestBody::Form(data) => req_builder.form(&data),
            };
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    fn default_headers(&self) -> [(&'static str, String); 3] {
        [
            ("User-Agent", self.user_agent.clone()),
            ("Accept", accept_html().to_string()),
            ("Accept-Language", accept_language("en")),
        ]
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> Result<EngineResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response.text().await?;

        Ok(EngineResponse {
            status,
            headers,
            text,
            url,
        })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_from_settings() {
        let settings = OutgoingSettings {
            useragent_suffix: Some("ops@example.org".to_string()),
            ..Default::default()
        };
        let client = HttpClient::with_settings(&settings).unwrap();
        assert!(client.user_agent().starts_with("searx-pdbe/"));
        assert!(client.user_agent().ends_with("ops@example.org"));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        for bad in [-1.0, f64::NAN] {
            let settings = OutgoingSettings {
                request_timeout: bad,
                ..Default::default()
            };
            assert!(HttpClient::with_settings(&settings).is_err(), "{bad}");
        }
    }
}
