//! Search error types

use std::time::Duration;
use thiserror::Error;

/// Errors from running a search on an engine
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    #[error("Request to {engine} failed: {error}")]
    Request {
        engine: String,
        error: anyhow::Error,
    },

    #[error("Invalid timeout for {engine}: {seconds} seconds")]
    InvalidTimeout { engine: String, seconds: f64 },

    #[error("Engine {engine} timed out after {timeout:?}")]
    Timeout { engine: String, timeout: Duration },

    #[error("Failed to parse response from {engine}: {error}")]
    Parse {
        engine: String,
        error: anyhow::Error,
    },
}
