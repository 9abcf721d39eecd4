//! Engine registry for managing available search engines

use super::traits::Engine;
use crate::config::EngineConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available search engines
pub struct EngineRegistry {
    /// Engines by name
    engines: HashMap<String, Arc<dyn Engine>>,
    /// Engine shortcuts (e.g., "pdb" -> "pdbe")
    shortcuts: HashMap<String, String>,
    /// Engine configurations
    configs: HashMap<String, EngineConfig>,
}

impl EngineRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            shortcuts: HashMap::new(),
            configs: HashMap::new(),
        }
    }

    /// Register an engine under its configured name
    pub fn register(&mut self, engine: Arc<dyn Engine>, config: EngineConfig) {
        let name = if config.name.is_empty() {
            engine.name().to_string()
        } else {
            config.name.clone()
        };

        if !config.shortcut.is_empty() {
            self.shortcuts.insert(config.shortcut.clone(), name.clone());
        }

        self.engines.insert(name.clone(), engine);
        self.configs.insert(name, config);
    }

    /// Get an engine by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Engine>> {
        self.engines.get(name)
    }

    /// Check if an engine exists
    pub fn contains(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    /// Get number of registered engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Resolve a name or shortcut to an engine name
    pub fn resolve_name<'a>(&'a self, name_or_shortcut: &'a str) -> Option<&'a str> {
        if self.engines.contains_key(name_or_shortcut) {
            Some(name_or_shortcut)
        } else {
            self.shortcuts.get(name_or_shortcut).map(|s| s.as_str())
        }
    }

    /// Get effective timeout for an engine
    pub fn get_timeout(&self, name: &str, default: f64) -> f64 {
        self.configs
            .get(name)
            .and_then(|c| c.timeout)
            .or_else(|| self.engines.get(name).map(|e| e.timeout()))
            .unwrap_or(default)
    }

    /// Get the first category an engine is configured for
    pub fn get_category(&self, name: &str) -> Option<&str> {
        self.configs
            .get(name)
            .and_then(|c| c.categories.first())
            .map(|s| s.as_str())
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
