//! Engine loader for initializing engines from configuration

use super::pdbe;
use super::registry::EngineRegistry;
use super::traits::Engine;
use crate::config::{EngineConfig, Settings};
use crate::network::searx_useragent;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Loader for initializing engines from configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Load all engines from settings
    pub fn load(settings: &Settings) -> Result<EngineRegistry> {
        let mut registry = EngineRegistry::new();

        for config in &settings.engines {
            if config.disabled {
                info!("Skipping disabled engine: {}", config.name);
                continue;
            }

            match Self::create_engine(&config.engine, config, settings) {
                Ok(engine) => {
                    info!("Loaded engine: {} ({})", config.name, config.engine);
                    registry.register(engine, config.clone());
                }
                Err(e) => {
                    warn!("Failed to load engine {}: {}", config.name, e);
                }
            }
        }

        info!("Loaded {} engines", registry.len());
        Ok(registry)
    }

    /// Create an engine instance by name
    fn create_engine(
        engine_type: &str,
        config: &EngineConfig,
        settings: &Settings,
    ) -> Result<Arc<dyn Engine>> {
        let mut engine: Box<dyn Engine> = match engine_type {
            "pdbe" => Box::new(
                pdbe::Pdbe::new()
                    .with_user_agent(searx_useragent(
                        settings.outgoing.useragent_suffix.as_deref(),
                    ))
                    .with_locale(&settings.ui.default_locale),
            ),
            _ => {
                return Err(anyhow::anyhow!("Unknown engine type: {}", engine_type));
            }
        };

        // Initialize the engine
        engine.init(config)?;

        // Validate configuration
        engine.validate(config)?;

        Ok(Arc::from(engine))
    }

    /// Get list of available engine types
    pub fn available_engines() -> Vec<&'static str> {
        vec!["pdbe"]
    }
}
