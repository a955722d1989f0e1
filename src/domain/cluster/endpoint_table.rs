//! Endpoint lookup for Solana clusters

use std::collections::HashMap;
use super::Cluster;
use crate::shared::errors::{ConnectionError, UnknownClusterError};
use crate::shared::utils::validate_endpoint_url;

/// Fixed endpoint of a locally hosted validator
pub const LOCALNET_URL: &str = "http://localhost:8899";

const DEVNET_URL: &str = "https://api.devnet.solana.com";
const TESTNET_URL: &str = "https://api.testnet.solana.com";
const MAINNET_BETA_URL: &str = "https://api.mainnet-beta.solana.com";

/// Maps clusters to RPC endpoint URLs.
///
/// Public clusters use the well-known Solana endpoints unless overridden.
/// Localnet always resolves to [`LOCALNET_URL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointTable {
    overrides: HashMap<Cluster, String>,
}

impl EndpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default public endpoint for a cluster
    pub fn public_endpoint(cluster: Cluster) -> &'static str {
        match cluster {
            Cluster::Devnet => DEVNET_URL,
            Cluster::Testnet => TESTNET_URL,
            Cluster::MainnetBeta => MAINNET_BETA_URL,
            Cluster::Localnet => LOCALNET_URL,
        }
    }

    /// Replace the endpoint of a public cluster
    pub fn with_override(mut self, cluster: Cluster, url: impl Into<String>) -> Result<Self, ConnectionError> {
        let url = url.into();
        if cluster.is_local() {
            return Err(ConnectionError::InvalidEndpoint {
                url,
                reason: format!("the {} endpoint is fixed to {}", cluster, LOCALNET_URL),
            });
        }
        validate_endpoint_url(&url)?;
        self.overrides.insert(cluster, url);
        Ok(self)
    }

    pub fn has_override(&self, cluster: Cluster) -> bool {
        self.overrides.contains_key(&cluster)
    }

    /// Endpoint URL for a cluster
    pub fn resolve(&self, cluster: Cluster) -> String {
        if cluster.is_local() {
            return LOCALNET_URL.to_string();
        }
        self.overrides
            .get(&cluster)
            .cloned()
            .unwrap_or_else(|| Self::public_endpoint(cluster).to_string())
    }

    /// Endpoint URL for a cluster given by name
    pub fn resolve_endpoint(&self, cluster: &str) -> Result<String, UnknownClusterError> {
        let cluster: Cluster = cluster.parse()?;
        Ok(self.resolve(cluster))
    }
}
