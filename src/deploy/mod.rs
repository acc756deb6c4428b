pub mod command;
pub mod cost;

use {
    crate::{
        client::{config::ClientConfig, environment::DEFAULT_NETWORK},
        solana::commitment::Commitment,
    },
    std::path::PathBuf,
};

/// Everything needed to deploy (or upgrade) a program with the `solana` CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Compiled program binary (`.so`).
    pub program_path: PathBuf,

    /// Keypair whose public key becomes the program id.
    pub program_keypair_path: PathBuf,

    /// Keypair that pays for the deployment and becomes the upgrade authority.
    pub deployer_keypair_path: PathBuf,

    /// Defaults to Analos mainnet.
    pub rpc_url: Option<String>,

    pub commitment: Option<Commitment>,

    /// Passed to the CLI as `--max-sign-attempts`.
    pub max_retries: Option<u32>,

    /// Send write transactions through the RPC endpoint instead of the TPU client.
    pub use_rpc: bool,
}

impl DeploymentConfig {
    pub fn new<P, K, D>(program_path: P, program_keypair_path: K, deployer_keypair_path: D) -> Self
    where
        P: Into<PathBuf>,
        K: Into<PathBuf>,
        D: Into<PathBuf>,
    {
        DeploymentConfig {
            program_path: program_path.into(),
            program_keypair_path: program_keypair_path.into(),
            deployer_keypair_path: deployer_keypair_path.into(),
            rpc_url: None,
            commitment: None,
            max_retries: None,
            use_rpc: false,
        }
    }

    pub fn rpc_url(&self) -> &str {
        self.rpc_url.as_deref().unwrap_or(DEFAULT_NETWORK)
    }

    /// Connection settings matching this deployment's endpoint and commitment.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.rpc_url(), self.commitment.unwrap_or_default())
    }
}
