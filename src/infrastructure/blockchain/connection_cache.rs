//! Per-endpoint cache of RPC connection handles

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use crate::domain::cluster::{Cluster, EndpointTable};
use crate::shared::errors::UnknownClusterError;

/// Builds a client handle bound to one endpoint URL
pub trait ConnectionFactory: Send + Sync {
    type Handle: Send + Sync;
    type Error;

    fn connect(&self, endpoint: &str) -> Result<Self::Handle, Self::Error>;
}

/// Shares one lazily built handle per endpoint URL.
///
/// Handles are keyed by the resolved URL, so two clusters that resolve to the
/// same endpoint get the same handle. Entries live as long as the cache.
pub struct ConnectionCache<F: ConnectionFactory> {
    endpoints: EndpointTable,
    factory: F,
    handles: Mutex<HashMap<String, Arc<F::Handle>>>,
}

impl<F: ConnectionFactory> ConnectionCache<F> {
    pub fn new(endpoints: EndpointTable, factory: F) -> Self {
        Self {
            endpoints,
            factory,
            handles: Mutex::new(HashMap::new()),
        }
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn resolve_endpoint(&self, cluster: &str) -> Result<String, UnknownClusterError> {
        self.endpoints.resolve_endpoint(cluster)
    }

    /// Get the handle for a cluster, building it on first use of its endpoint.
    ///
    /// Factory errors are returned unchanged and nothing is cached for them.
    pub fn get_handle(&self, cluster: Cluster) -> Result<Arc<F::Handle>, F::Error> {
        let endpoint = self.endpoints.resolve(cluster);

        // Held across construction so each endpoint is built at most once.
        let mut handles = self.handles.lock();
        if let Some(handle) = handles.get(&endpoint) {
            debug!("Reusing connection for {} ({})", cluster, endpoint);
            return Ok(Arc::clone(handle));
        }

        info!("Opening connection for {} at {}", cluster, endpoint);
        let handle = Arc::new(self.factory.connect(&endpoint)?);
        handles.insert(endpoint, Arc::clone(&handle));
        Ok(handle)
    }

    /// Same as [`get_handle`](Self::get_handle) for a cluster given by name
    pub fn get_handle_by_name(&self, cluster: &str) -> Result<Arc<F::Handle>, F::Error>
    where
        F::Error: From<UnknownClusterError>,
    {
        let cluster: Cluster = cluster.parse()?;
        self.get_handle(cluster)
    }

    /// Number of handles built so far
    pub fn constructed_count(&self) -> usize {
        self.handles.lock().len()
    }

    pub fn cached_endpoints(&self) -> Vec<String> {
        let mut endpoints: Vec<String> = self.handles.lock().keys().cloned().collect();
        endpoints.sort();
        endpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::shared::errors::ConnectionError;

    #[derive(Debug)]
    struct FakeHandle {
        endpoint: String,
        serial: usize,
    }

    #[derive(Default)]
    struct CountingFactory {
        built: AtomicUsize,
    }

    impl ConnectionFactory for CountingFactory {
        type Handle = FakeHandle;
        type Error = ConnectionError;

        fn connect(&self, endpoint: &str) -> Result<FakeHandle, ConnectionError> {
            let serial = self.built.fetch_add(1, Ordering::SeqCst);
            Ok(FakeHandle { endpoint: endpoint.to_string(), serial })
        }
    }

    struct FailingFactory;

    impl ConnectionFactory for FailingFactory {
        type Handle = FakeHandle;
        type Error = ConnectionError;

        fn connect(&self, endpoint: &str) -> Result<FakeHandle, ConnectionError> {
            Err(ConnectionError::Rpc(format!("refused by {}", endpoint)))
        }
    }

    fn cache() -> ConnectionCache<CountingFactory> {
        ConnectionCache::new(EndpointTable::new(), CountingFactory::default())
    }

    #[test]
    fn test_repeated_requests_share_handle() {
        let cache = cache();
        let first = cache.get_handle(Cluster::Devnet).unwrap();
        let second = cache.get_handle(Cluster::Devnet).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.endpoint, "https://api.devnet.solana.com");
        assert_eq!(cache.constructed_count(), 1);
    }

    #[test]
    fn test_interleaved_requests_keep_handles() {
        let cache = cache();
        let devnet = cache.get_handle(Cluster::Devnet).unwrap();
        let localnet = cache.get_handle(Cluster::Localnet).unwrap();
        let devnet_again = cache.get_handle(Cluster::Devnet).unwrap();

        assert!(Arc::ptr_eq(&devnet, &devnet_again));
        assert!(!Arc::ptr_eq(&devnet, &localnet));
        assert_eq!(localnet.endpoint, "http://localhost:8899");
        assert_eq!(cache.constructed_count(), 2);
    }

    #[test]
    fn test_clusters_with_same_endpoint_share_handle() {
        let endpoints = EndpointTable::new()
            .with_override(Cluster::Testnet, "https://api.devnet.solana.com")
            .unwrap();
        let cache = ConnectionCache::new(endpoints, CountingFactory::default());

        let devnet = cache.get_handle(Cluster::Devnet).unwrap();
        let testnet = cache.get_handle(Cluster::Testnet).unwrap();

        assert!(Arc::ptr_eq(&devnet, &testnet));
        assert_eq!(devnet.serial, 0);
        assert_eq!(cache.cached_endpoints(), vec!["https://api.devnet.solana.com".to_string()]);
    }

    #[test]
    fn test_unknown_cluster_leaves_cache_untouched() {
        let cache = cache();
        let err = cache.get_handle_by_name("moonnet").unwrap_err();

        assert!(matches!(err, ConnectionError::UnknownCluster(UnknownClusterError(ref name)) if name == "moonnet"));
        assert!(cache.resolve_endpoint("moonnet").is_err());
        assert_eq!(cache.constructed_count(), 0);
    }

    #[test]
    fn test_handle_by_name_matches_handle_by_cluster() {
        let cache = cache();
        let by_name = cache.get_handle_by_name("mainnet-beta").unwrap();
        let by_cluster = cache.get_handle(Cluster::MainnetBeta).unwrap();
        assert!(Arc::ptr_eq(&by_name, &by_cluster));
    }

    #[test]
    fn test_factory_error_passes_through() {
        let cache = ConnectionCache::new(EndpointTable::new(), FailingFactory);
        let err = cache.get_handle(Cluster::Localnet).unwrap_err();

        assert_eq!(err.to_string(), "RPC request failed: refused by http://localhost:8899");
        assert_eq!(cache.constructed_count(), 0);
    }
}
