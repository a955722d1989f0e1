//! Pool manager for liquidity pool operations

use chrono::Utc;
use super::Pool;
use crate::shared::errors::PoolError;
use crate::shared::utils::generate_id;

/// Manages the list of known liquidity pools
#[derive(Debug, Clone, Default)]
pub struct PoolManager {
    pools: Vec<Pool>,
}

impl PoolManager {
    pub fn new() -> Self {
        Self { pools: Vec::new() }
    }

    pub fn from_pools(pools: Vec<Pool>) -> Self {
        Self { pools }
    }

    /// Register a new pool for a token pair under a fresh address
    pub fn add_pool(&mut self, token_a: &str, token_b: &str) -> Result<&Pool, PoolError> {
        let token_a = token_a.trim();
        let token_b = token_b.trim();
        if token_a.is_empty() || token_b.is_empty() {
            return Err(PoolError::InvalidPool("token labels must not be empty".to_string()));
        }

        self.pools.push(Pool {
            address: generate_id(),
            token_a: token_a.to_string(),
            token_b: token_b.to_string(),
            created_at: Utc::now(),
        });

        Ok(&self.pools[self.pools.len() - 1])
    }

    /// Remove a pool by address
    pub fn remove_pool(&mut self, address: &str) -> Option<Pool> {
        let index = self.pools.iter().position(|pool| pool.address == address)?;
        Some(self.pools.remove(index))
    }

    pub fn get_pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn find_pool(&self, address: &str) -> Option<&Pool> {
        self.pools.iter().find(|pool| pool.address == address)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
