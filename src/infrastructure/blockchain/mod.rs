//! Solana network access

pub mod connection_cache;
pub mod rpc_client;

pub use connection_cache::{ConnectionCache, ConnectionFactory};
pub use rpc_client::{ClusterStatus, SolanaConnectionFactory, SolanaRpcClient, DEFAULT_COMMITMENT};
