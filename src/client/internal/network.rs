use {
    crate::{model::network::Health, solana::commitment::Commitment},
    solana_client::{
        client_error::{ClientError, ClientErrorKind},
        nonblocking::rpc_client::RpcClient,
        rpc_request::RpcError,
    },
    std::sync::Arc,
};

/// JSON RPC error code returned by `getHealth` when the node is behind.
const NODE_UNHEALTHY: i64 = -32005;

pub struct InternalNetworkClient {
    client: Arc<RpcClient>,
}

impl InternalNetworkClient {
    pub fn new(client: Arc<RpcClient>) -> InternalNetworkClient {
        InternalNetworkClient { client }
    }

    /// Returns the `solana-core` version reported by the node.
    pub async fn get_version(&self) -> Result<String, ClientError> {
        let version = self.client.get_version().await?;

        Ok(version.solana_core)
    }

    pub async fn get_slot(&self, commitment: Commitment) -> Result<u64, ClientError> {
        self.client
            .get_slot_with_commitment(commitment.to_config())
            .await
    }

    pub async fn get_block_height(&self, commitment: Commitment) -> Result<u64, ClientError> {
        self.client
            .get_block_height_with_commitment(commitment.to_config())
            .await
    }

    /// Maps the node's `getHealth` answer onto a [`Health`].
    ///
    /// Transport and other RPC failures are returned as errors.
    pub async fn get_health(&self) -> Result<Health, ClientError> {
        match self.client.get_health().await {
            Ok(()) => Ok(Health::Ok),
            Err(err) if is_node_unhealthy(&err) => Ok(Health::Degraded),
            Err(err) => Err(err),
        }
    }
}

fn is_node_unhealthy(err: &ClientError) -> bool {
    matches!(
        err.kind(),
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. }) if *code == NODE_UNHEALTHY
    )
}
