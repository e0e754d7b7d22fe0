use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::error::{AppError, Result};
use crate::domain::postal::PipelineConfig;

/// Optional settings file read from the working directory
pub const CONFIG_FILE: &str = "postal.toml";

/// Prefix for environment overrides, e.g. `POSTAL_OUTPUT=out.csv`
pub const ENV_PREFIX: &str = "POSTAL_";

pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    /// Defaults, then `postal.toml`, then `POSTAL_*` environment variables
    pub fn new() -> Self {
        Self::with_file(CONFIG_FILE)
    }

    pub fn with_file(path: impl AsRef<Path>) -> Self {
        let figment = Figment::from(Serialized::defaults(PipelineConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX));

        Self { figment }
    }

    pub fn load(&self) -> Result<PipelineConfig> {
        let config: PipelineConfig = self.figment.extract()?;
        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid pipeline config: {}", e)))?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
