//! Error handling for the application

use thiserror::Error;

/// Raised when a cluster name matches none of the known clusters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown cluster: {0}")]
pub struct UnknownClusterError(pub String);

/// Connection-related errors
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error(transparent)]
    UnknownCluster(#[from] UnknownClusterError),

    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("RPC request failed: {0}")]
    Rpc(String),
}

/// Pool-related errors
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Invalid pool: {0}")]
    InvalidPool(String),

    #[error("Pool store error: {0}")]
    Store(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Pool error: {0}")]
    PoolError(String),
}

impl From<UnknownClusterError> for AppError {
    fn from(err: UnknownClusterError) -> Self {
        AppError::ConnectionError(err.to_string())
    }
}

impl From<ConnectionError> for AppError {
    fn from(err: ConnectionError) -> Self {
        AppError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for AppError {
    fn from(err: PoolError) -> Self {
        AppError::PoolError(err.to_string())
    }
}
