use std::fs;
use std::path::Path;
use toml;
use tracing::info;
use crate::shared::types::AppConfig;
use crate::shared::errors::AppError;

pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

/// Загрузчик конфигурации
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `path`, or from Config.toml when no path is given.
    /// A missing Config.toml falls back to defaults; a missing explicit path is an error.
    pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !explicit && !path.exists() {
            info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            return Ok(AppConfig::default());
        }

        let config_content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::parse_config(&config_content)
    }

    pub fn parse_config(content: &str) -> Result<AppConfig, AppError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        // Surface bad cluster names, commitments and overrides at load time
        config.network.cluster()?;
        config.network.commitment()?;
        config.network.endpoint_table()?;
        config.network.validate_timeout()?;

        Ok(config)
    }
}
