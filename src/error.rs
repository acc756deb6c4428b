use {
    solana_client::client_error::ClientError, std::path::PathBuf, thiserror::Error as ThisError,
};

/// Base Error for Analos launch SDK errors.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] ClientError),

    #[error("Program binary not found: {}", .0.display())]
    ProgramNotFound(PathBuf),

    #[error("Program keypair not found: {}", .0.display())]
    KeypairNotFound(PathBuf),

    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Program not found. Use get_deployment_command() for initial deployment.")]
    ProgramNotDeployed,

    #[error("Program is not executable. Cannot upgrade.")]
    ProgramNotExecutable,

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Unknown commitment: {0}")]
    UnknownCommitment(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the error came back from the RPC node rather than
    /// from local validation.
    pub fn is_rpc(&self) -> bool {
        matches!(self, Error::Rpc(_))
    }
}
