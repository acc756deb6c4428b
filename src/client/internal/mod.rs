pub mod account;
pub mod airdrop;
pub mod network;

use {
    account::InternalAccountClient, airdrop::InternalAirdropClient,
    network::InternalNetworkClient, solana_client::nonblocking::rpc_client::RpcClient,
    std::sync::Arc,
};

pub struct InternalClient {
    pub account: InternalAccountClient,
    pub network: InternalNetworkClient,
    pub airdrop: InternalAirdropClient,
}

impl InternalClient {
    /// Shares one RPC connection between the per-concern clients.
    pub fn new(rpc: Arc<RpcClient>) -> InternalClient {
        InternalClient {
            account: InternalAccountClient::new(rpc.clone()),
            network: InternalNetworkClient::new(rpc.clone()),
            airdrop: InternalAirdropClient::new(rpc),
        }
    }
}
