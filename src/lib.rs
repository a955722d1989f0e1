//! Pooldash - Solana liquidity pool dashboard backend
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use domain::cluster::{Cluster, EndpointTable, LOCALNET_URL};
pub use domain::pool::{Pool, PoolManager};
pub use infrastructure::blockchain::{ConnectionCache, ConnectionFactory, SolanaConnectionFactory};
pub use shared::errors::{ConnectionError, UnknownClusterError};
