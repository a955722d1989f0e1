//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use solana_sdk::commitment_config::CommitmentConfig;
use crate::domain::cluster::{Cluster, EndpointTable};
use crate::infrastructure::blockchain::rpc_client::parse_commitment;
use crate::shared::errors::AppError;

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub cluster: String,
    pub commitment: String,
    pub timeout_ms: u64,
    /// Endpoint overrides keyed by cluster name
    pub endpoints: HashMap<String, String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet.to_string(),
            commitment: "finalized".to_string(),
            timeout_ms: 30000,
            endpoints: HashMap::new(),
        }
    }
}

impl NetworkConfig {
    pub fn cluster(&self) -> Result<Cluster, AppError> {
        Ok(self.cluster.parse()?)
    }

    pub fn commitment(&self) -> Result<CommitmentConfig, AppError> {
        parse_commitment(&self.commitment)
            .ok_or_else(|| AppError::ConfigError(format!("Unknown commitment level: {}", self.commitment)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate_timeout(&self) -> Result<(), AppError> {
        if self.timeout_ms == 0 {
            return Err(AppError::ConfigError("timeout_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Build the endpoint table with the configured overrides applied
    pub fn endpoint_table(&self) -> Result<EndpointTable, AppError> {
        let mut table = EndpointTable::new();
        for (name, url) in &self.endpoints {
            let cluster: Cluster = name.parse()?;
            if table.has_override(cluster) {
                return Err(AppError::ConfigError(format!("Duplicate endpoint override for {}", cluster)));
            }
            table = table.with_override(cluster, url.clone())?;
        }
        Ok(table)
    }
}

/// Pool store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolStoreConfig {
    pub store_path: PathBuf,
}

impl Default for PoolStoreConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("pools.json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub pools: PoolStoreConfig,
}
