//! Settings structures for searx-pdbe configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Main settings structure, a subset of SearXNG's settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub outgoing: OutgoingSettings,
    pub ui: UiSettings,
    pub engines: Vec<EngineConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            outgoing: OutgoingSettings::default(),
            ui: UiSettings::default(),
            engines: default_engines(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEARX_PDBE_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SEARX_PDBE_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("SEARX_PDBE_USERAGENT_SUFFIX") {
            self.outgoing.useragent_suffix = Some(val);
        }
        if let Some(val) = lookup("SEARX_PDBE_REQUEST_TIMEOUT") {
            match val.parse::<f64>() {
                Ok(timeout) if timeout_from_secs(timeout).is_ok() => {
                    self.outgoing.request_timeout = timeout;
                }
                _ => warn!("Ignoring invalid SEARX_PDBE_REQUEST_TIMEOUT: {}", val),
            }
        }
    }
}

/// Convert a timeout in seconds, rejecting negative and non-finite values
pub fn timeout_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| anyhow::anyhow!("Invalid timeout: {} seconds", secs))
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Maximum request timeout
    pub max_request_timeout: Option<f64>,
    /// Text appended to the searx User-Agent
    pub useragent_suffix: Option<String>,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            max_request_timeout: Some(30.0),
            useragent_suffix: None,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

impl OutgoingSettings {
    /// Default request timeout, rejected if negative or not finite
    pub fn request_timeout(&self) -> Result<Duration> {
        timeout_from_secs(self.request_timeout)
    }

    /// Upper bound for per-engine timeouts, if any
    pub fn max_request_timeout(&self) -> Result<Option<Duration>> {
        self.max_request_timeout.map(timeout_from_secs).transpose()
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Individual engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine name (unique identifier)
    pub name: String,
    /// Engine module to use
    pub engine: String,
    /// Categories this engine belongs to
    pub categories: Vec<String>,
    /// Short name for UI
    pub shortcut: String,
    /// Whether engine is disabled
    pub disabled: bool,
    /// Custom timeout for this engine
    pub timeout: Option<f64>,
    /// Additional engine-specific settings
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl EngineConfig {
    /// Read an engine-specific boolean setting
    pub fn extra_bool(&self, key: &str) -> Option<bool> {
        self.extra.get(key).and_then(|v| v.as_bool())
    }

    /// Read an engine-specific string setting
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            engine: String::new(),
            categories: vec!["general".to_string()],
            shortcut: String::new(),
            disabled: false,
            timeout: None,
            extra: HashMap::new(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Default locale
    pub default_locale: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
        }
    }
}

/// Default engine configurations
fn default_engines() -> Vec<EngineConfig> {
    vec![EngineConfig {
        name: "pdbe".to_string(),
        engine: "pdbe".to_string(),
        categories: vec!["science".to_string()],
        shortcut: "pdb".to_string(),
        ..Default::default()
    }]
}
