//! Pool domain - liquidity pool registry

mod pool_manager;

pub use pool_manager::PoolManager;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liquidity pool record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub address: String,
    pub token_a: String,
    pub token_b: String,
    pub created_at: DateTime<Utc>,
}
