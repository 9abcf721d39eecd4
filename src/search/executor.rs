//! Search execution against a single engine

use super::error::SearchError;
use crate::engines::{EngineRegistry, EngineResults, RequestParams};
use crate::network::HttpClient;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Search executor that runs a query through a registered engine
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Engine registry
    registry: Arc<EngineRegistry>,
    /// Default timeout
    default_timeout: Duration,
    /// Maximum timeout
    max_timeout: Duration,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, registry: Arc<EngineRegistry>) -> Self {
        Self {
            client,
            registry,
            default_timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT),
            max_timeout: Duration::from_secs(crate::MAX_TIMEOUT),
        }
    }

    /// Set default timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Set maximum timeout
    pub fn with_max_timeout(mut self, timeout: Duration) -> Self {
        self.max_timeout = timeout;
        self
    }

    /// Run a query on the engine named (or abbreviated) by `engine`
    pub async fn execute(
        &self,
        engine: &str,
        params: &RequestParams,
    ) -> Result<EngineResults, SearchError> {
        let name = self
            .registry
            .resolve_name(engine)
            .ok_or_else(|| SearchError::UnknownEngine(engine.to_string()))?;
        let engine = self
            .registry
            .get(name)
            .ok_or_else(|| SearchError::UnknownEngine(name.to_string()))?;

        let seconds = self
            .registry
            .get_timeout(name, self.default_timeout.as_secs_f64())
            .min(self.max_timeout.as_secs_f64());
        let engine_timeout =
            Duration::try_from_secs_f64(seconds).map_err(|_| SearchError::InvalidTimeout {
                engine: name.to_string(),
                seconds,
            })?;
        let category = self
            .registry
            .get_category(name)
            .unwrap_or(&params.category)
            .to_string();

        debug!("Searching engine {} with timeout {:?}", name, engine_timeout);

        let request = engine
            .request(params)
            .map_err(|error| SearchError::Request {
                engine: name.to_string(),
                error,
            })?;

        let start = Instant::now();
        let response = timeout(
            engine_timeout,
            self.client.execute_with_timeout(request, engine_timeout),
        )
        .await
        .map_err(|_| {
            warn!("Timeout for engine {}", name);
            SearchError::Timeout {
                engine: name.to_string(),
                timeout: engine_timeout,
            }
        })?
        .map_err(|error| {
            warn!("Request failed for {}: {}", name, error);
            SearchError::Request {
                engine: name.to_string(),
                error,
            }
        })?;

        let mut results = engine.response(response, params).map_err(|error| {
            warn!("Failed to parse response from {}: {}", name, error);
            SearchError::Parse {
                engine: name.to_string(),
                error,
            }
        })?;

        for result in &mut results.results {
            result.category = Some(category.clone());
        }

        info!(
            "Engine {} returned {} results in {:?}",
            name,
            results.len(),
            start.elapsed()
        );

        Ok(results)
    }
}
