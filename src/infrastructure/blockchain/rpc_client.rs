//! Solana RPC client construction and cluster probing

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use super::connection_cache::ConnectionFactory;
use crate::shared::errors::ConnectionError;
use crate::shared::utils::validate_endpoint_url;

/// The default time to wait when confirming a transaction
pub const DEFAULT_COMMITMENT: CommitmentConfig = CommitmentConfig {
    commitment: CommitmentLevel::Finalized,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Parse a commitment level name. `max` is the legacy alias of `finalized`.
pub fn parse_commitment(name: &str) -> Option<CommitmentConfig> {
    match name.trim() {
        "processed" => Some(CommitmentConfig::processed()),
        "confirmed" => Some(CommitmentConfig::confirmed()),
        "finalized" | "max" => Some(CommitmentConfig::finalized()),
        _ => None,
    }
}

/// Builds non-blocking Solana RPC clients
#[derive(Debug, Clone)]
pub struct SolanaConnectionFactory {
    commitment: CommitmentConfig,
    timeout: Duration,
}

impl SolanaConnectionFactory {
    pub fn new(commitment: CommitmentConfig, timeout: Duration) -> Self {
        Self { commitment, timeout }
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }
}

impl Default for SolanaConnectionFactory {
    fn default() -> Self {
        Self::new(DEFAULT_COMMITMENT, DEFAULT_TIMEOUT)
    }
}

impl ConnectionFactory for SolanaConnectionFactory {
    type Handle = RpcClient;
    type Error = ConnectionError;

    fn connect(&self, endpoint: &str) -> Result<RpcClient, ConnectionError> {
        validate_endpoint_url(endpoint)?;
        debug!("Building RPC client for {} ({:?})", endpoint, self.commitment.commitment);
        Ok(RpcClient::new_with_timeout_and_commitment(
            endpoint.to_string(),
            self.timeout,
            self.commitment,
        ))
    }
}

/// Snapshot of a cluster as seen through one RPC endpoint
#[derive(Debug, Clone)]
pub struct ClusterStatus {
    pub endpoint: String,
    pub version: String,
    pub slot: u64,
    pub blockhash: String,
}

/// Solana RPC client wrapper over a shared handle
pub struct SolanaRpcClient {
    client: Arc<RpcClient>,
}

impl SolanaRpcClient {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }

    pub fn endpoint(&self) -> String {
        self.client.url()
    }

    /// Get node version
    pub async fn get_version(&self) -> Result<String, ConnectionError> {
        self.client.get_version().await
            .map(|version| version.solana_core)
            .map_err(|e| ConnectionError::Rpc(format!("Failed to get version: {}", e)))
    }

    /// Get slot
    pub async fn get_slot(&self) -> Result<u64, ConnectionError> {
        self.client.get_slot().await
            .map_err(|e| ConnectionError::Rpc(format!("Failed to get slot: {}", e)))
    }

    /// Get latest blockhash
    pub async fn get_latest_blockhash(&self) -> Result<solana_sdk::hash::Hash, ConnectionError> {
        self.client.get_latest_blockhash().await
            .map_err(|e| ConnectionError::Rpc(format!("Failed to get latest blockhash: {}", e)))
    }

    /// Query version, slot and blockhash in one go
    pub async fn status(&self) -> Result<ClusterStatus, ConnectionError> {
        let version = self.get_version().await?;
        let slot = self.get_slot().await?;
        let blockhash = self.get_latest_blockhash().await?;

        Ok(ClusterStatus {
            endpoint: self.endpoint(),
            version,
            slot,
            blockhash: blockhash.to_string(),
        })
    }
}
