//! Cluster domain - Solana network identifiers and their RPC endpoints

mod endpoint_table;

pub use endpoint_table::{EndpointTable, LOCALNET_URL};

use std::fmt;
use std::str::FromStr;
use crate::shared::errors::UnknownClusterError;

/// Solana network a connection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub const ALL: [Cluster; 4] = [
        Cluster::Devnet,
        Cluster::Testnet,
        Cluster::MainnetBeta,
        Cluster::Localnet,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Cluster::Localnet)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = UnknownClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cluster::ALL
            .into_iter()
            .find(|cluster| cluster.as_str() == s.trim())
            .ok_or_else(|| UnknownClusterError(s.to_string()))
    }
}
