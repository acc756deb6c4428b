use {
    crate::solana::commitment::Commitment,
    solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient},
    solana_sdk::{pubkey::Pubkey as SolanaPublicKey, signature::Signature},
    std::sync::Arc,
    tracing::debug,
};

pub struct InternalAirdropClient {
    client: Arc<RpcClient>,
}

impl InternalAirdropClient {
    pub fn new(client: Arc<RpcClient>) -> InternalAirdropClient {
        InternalAirdropClient { client }
    }

    /// Requests lamports from the faucet and waits until the airdrop
    /// transaction reaches `commitment`.
    pub async fn request_airdrop(
        &self,
        public_key: &SolanaPublicKey,
        lamports: u64,
        commitment: Commitment,
    ) -> Result<Signature, ClientError> {
        let signature = self.client.request_airdrop(public_key, lamports).await?;
        debug!(account = %public_key, lamports, %signature, "airdrop requested");

        self.client
            .poll_for_signature_with_commitment(&signature, commitment.to_config())
            .await?;

        Ok(signature)
    }
}
