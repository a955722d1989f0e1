//! Application services and use cases

use std::sync::Arc;
use tracing::info;
use crate::domain::cluster::Cluster;
use crate::domain::notification::{Notification, NotificationLog};
use crate::domain::pool::{Pool, PoolManager};
use crate::infrastructure::blockchain::{
    ClusterStatus,
    ConnectionCache,
    SolanaConnectionFactory,
    SolanaRpcClient,
};
use crate::infrastructure::storage::JsonPoolStore;
use crate::shared::errors::{AppError, ConnectionError};
use crate::shared::types::AppConfig;

/// Application service for cluster connections
pub struct ConnectionService {
    cache: Arc<ConnectionCache<SolanaConnectionFactory>>,
}

impl ConnectionService {
    pub fn new(cache: Arc<ConnectionCache<SolanaConnectionFactory>>) -> Self {
        Self { cache }
    }

    /// Create service from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let factory = SolanaConnectionFactory::new(config.network.commitment()?, config.network.timeout());
        let cache = ConnectionCache::new(config.network.endpoint_table()?, factory);
        Ok(Self::new(Arc::new(cache)))
    }

    pub fn cache(&self) -> &Arc<ConnectionCache<SolanaConnectionFactory>> {
        &self.cache
    }

    pub fn endpoint(&self, cluster: Cluster) -> String {
        self.cache.endpoints().resolve(cluster)
    }

    pub fn client(&self, cluster: Cluster) -> Result<SolanaRpcClient, ConnectionError> {
        Ok(SolanaRpcClient::new(self.cache.get_handle(cluster)?))
    }

    /// Probe a cluster through its cached connection
    pub async fn status(&self, cluster: Cluster) -> Result<ClusterStatus, ConnectionError> {
        let status = self.client(cluster)?.status().await?;
        info!("{} at slot {} (solana-core {})", cluster, status.slot, status.version);
        Ok(status)
    }
}

/// Application service for the pool registry
pub struct PoolService {
    store: JsonPoolStore,
    pools: PoolManager,
    notifications: NotificationLog,
}

impl PoolService {
    /// Open the registry persisted in `store`
    pub fn open(store: JsonPoolStore) -> Result<Self, AppError> {
        let pools = store.load()?;
        info!("Loaded {} pools from {}", pools.len(), store.path().display());
        Ok(Self {
            store,
            pools,
            notifications: NotificationLog::new(),
        })
    }

    pub fn list_pools(&self) -> &[Pool] {
        self.pools.get_pools()
    }

    /// Add a pool, persist the registry and raise a notification
    pub fn add_pool(&mut self, token_a: &str, token_b: &str) -> Result<Pool, AppError> {
        let pool = self.pools.add_pool(token_a, token_b)?.clone();
        if let Err(e) = self.store.save(&self.pools) {
            // Keep memory in step with the store
            self.pools.remove_pool(&pool.address);
            return Err(e.into());
        }
        self.notifications.push("Pool added");
        info!("Added pool {} ({}/{})", pool.address, pool.token_a, pool.token_b);
        Ok(pool)
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
