use {
    crate::solana::commitment::Commitment,
    solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient},
    solana_sdk::{account::Account, pubkey::Pubkey as SolanaPublicKey},
    std::sync::Arc,
    tracing::debug,
};

pub struct InternalAccountClient {
    client: Arc<RpcClient>,
}

impl InternalAccountClient {
    pub fn new(client: Arc<RpcClient>) -> InternalAccountClient {
        InternalAccountClient { client }
    }

    /// Returns the account, or None if it does not exist.
    pub async fn get_account(
        &self,
        public_key: &SolanaPublicKey,
        commitment: Commitment,
    ) -> Result<Option<Account>, ClientError> {
        debug!(account = %public_key, %commitment, "getAccountInfo");

        let res = self
            .client
            .get_account_with_commitment(public_key, commitment.to_config())
            .await?;

        Ok(res.value)
    }

    pub async fn get_balance(
        &self,
        public_key: &SolanaPublicKey,
        commitment: Commitment,
    ) -> Result<u64, ClientError> {
        debug!(account = %public_key, %commitment, "getBalance");

        let res = self
            .client
            .get_balance_with_commitment(public_key, commitment.to_config())
            .await?;

        Ok(res.value)
    }

    pub async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ClientError> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
    }
}
