//! CLI commands and handlers
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, error};
use crate::application::services::{ConnectionService, PoolService};
use crate::domain::cluster::Cluster;
use crate::infrastructure::storage::JsonPoolStore;
use crate::shared::config::ConfigLoader;
use crate::shared::errors::AppError;
use crate::shared::types::AppConfig;

#[derive(Parser)]
#[command(name = "pooldash")]
#[command(version, about = "Solana liquidity pool dashboard backend")]
pub struct Cli {
    /// Path to config file (defaults to Config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the RPC endpoint a cluster resolves to
    Endpoint {
        /// Cluster name (devnet, testnet, mainnet-beta, localnet)
        #[arg(short, long)]
        cluster: Option<String>,
    },

    /// Show version, slot and blockhash of a cluster
    Status {
        /// Cluster name (devnet, testnet, mainnet-beta, localnet)
        #[arg(short, long)]
        cluster: Option<String>,
    },

    /// Manage the pool registry
    Pools {
        #[command(subcommand)]
        command: PoolCommands,
    },
}

#[derive(Subcommand)]
pub enum PoolCommands {
    /// List registered pools
    List,

    /// Register a pool for a token pair
    Add {
        #[arg(long)]
        token_a: String,

        #[arg(long)]
        token_b: String,
    },
}

/// Runs parsed CLI commands
pub struct CommandExecutor {
    config: AppConfig,
}

impl CommandExecutor {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        Ok(Self::new(ConfigLoader::load_config(cli.config.as_deref())?))
    }

    /// CLI argument wins over the configured cluster
    fn select_cluster(&self, cluster: Option<&str>) -> Result<Cluster, AppError> {
        match cluster {
            Some(name) => Ok(name.parse()?),
            None => self.config.network.cluster(),
        }
    }

    pub async fn execute(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Endpoint { cluster } => {
                let cluster = self.select_cluster(cluster.as_deref())?;
                let endpoint = self.config.network.endpoint_table()?.resolve(cluster);
                println!("{}", endpoint);
            }
            Commands::Status { cluster } => {
                let cluster = self.select_cluster(cluster.as_deref())?;
                let service = ConnectionService::from_config(&self.config)?;
                info!("Checking {} at {}", cluster, service.endpoint(cluster));

                match service.status(cluster).await {
                    Ok(status) => {
                        println!("cluster:   {}", cluster);
                        println!("endpoint:  {}", status.endpoint);
                        println!("version:   {}", status.version);
                        println!("slot:      {}", status.slot);
                        println!("blockhash: {}", status.blockhash);
                    }
                    Err(e) => {
                        error!("❌ Failed to reach {}: {}", cluster, e);
                        return Err(e.into());
                    }
                }
            }
            Commands::Pools { command } => {
                let store = JsonPoolStore::new(self.config.pools.store_path.clone());
                let mut service = PoolService::open(store)?;

                match command {
                    PoolCommands::List => {
                        if service.list_pools().is_empty() {
                            println!("No pools registered");
                        }
                        for pool in service.list_pools() {
                            println!("{}  {}/{}  {}", pool.address, pool.token_a, pool.token_b, pool.created_at.to_rfc3339());
                        }
                    }
                    PoolCommands::Add { token_a, token_b } => {
                        let pool = service.add_pool(&token_a, &token_b)?;
                        println!("{}", pool.address);
                        for notification in service.take_notifications() {
                            info!("🔔 {}", notification.message);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pools_add() {
        let cli = Cli::parse_from(["pooldash", "pools", "add", "--token-a", "SOL", "--token-b", "USDC"]);
        match cli.command {
            Commands::Pools { command: PoolCommands::Add { token_a, token_b } } => {
                assert_eq!(token_a, "SOL");
                assert_eq!(token_b, "USDC");
            }
            _ => panic!("expected pools add"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["pooldash", "endpoint", "--config", "other.toml", "-c", "localnet"]);
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert!(matches!(cli.command, Commands::Endpoint { cluster: Some(ref c) } if c == "localnet"));
    }

    #[test]
    fn test_select_cluster_prefers_argument() {
        let executor = CommandExecutor::new(AppConfig::default());
        assert_eq!(executor.select_cluster(Some("testnet")).unwrap(), Cluster::Testnet);
        assert_eq!(executor.select_cluster(None).unwrap(), Cluster::Devnet);
        assert!(executor.select_cluster(Some("moonnet")).is_err());
    }

    #[tokio::test]
    async fn test_endpoint_command() {
        let executor = CommandExecutor::new(AppConfig::default());

        executor.execute(Commands::Endpoint { cluster: Some("localnet".to_string()) }).await.unwrap();
        executor.execute(Commands::Endpoint { cluster: None }).await.unwrap();

        let err = executor
            .execute(Commands::Endpoint { cluster: Some("moonnet".to_string()) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_pools_list_reads_store() {
        let path = std::env::temp_dir().join(format!("pools-{}.json", crate::shared::utils::generate_id()));
        let mut config = AppConfig::default();
        config.pools.store_path = path.clone();
        let executor = CommandExecutor::new(config);

        // Empty registry
        executor.execute(Commands::Pools { command: PoolCommands::List }).await.unwrap();
        assert!(!path.exists());

        let mut pools = JsonPoolStore::new(&path).load().unwrap();
        pools.add_pool("SOL", "USDC").unwrap();
        JsonPoolStore::new(&path).save(&pools).unwrap();

        executor.execute(Commands::Pools { command: PoolCommands::List }).await.unwrap();
        assert_eq!(JsonPoolStore::new(&path).load().unwrap().len(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_pools_list_rejects_corrupt_store() {
        let path = std::env::temp_dir().join(format!("pools-{}.json", crate::shared::utils::generate_id()));
        std::fs::write(&path, "not json").unwrap();
        let mut config = AppConfig::default();
        config.pools.store_path = path.clone();

        let err = CommandExecutor::new(config)
            .execute(Commands::Pools { command: PoolCommands::List })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PoolError(_)));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_pools_add_writes_store() {
        let path = std::env::temp_dir().join(format!("pools-{}.json", crate::shared::utils::generate_id()));
        let mut config = AppConfig::default();
        config.pools.store_path = path.clone();
        let executor = CommandExecutor::new(config);

        executor
            .execute(Commands::Pools {
                command: PoolCommands::Add { token_a: "a".to_string(), token_b: "b".to_string() },
            })
            .await
            .unwrap();

        let pools = JsonPoolStore::new(&path).load().unwrap();
        assert_eq!(pools.len(), 1);
        std::fs::remove_file(&path).unwrap();
    }
}
